//! Crease-grid builder: the row-recursive point construction.
//!
//! Model
//! - Row `j` holds `n+1` vertices on a circular arc of step `rho`
//!   around a per-row symmetry center, which is solved from the base
//!   vertices `v1`, `v2` of the row's second constituent triangle.
//! - The next row's bases are solved from the first three points of the
//!   current row (ASA with angles `sigma` and `gamma`), so `v1`, `v2`
//!   chain across rows and floating-point error grows linearly in `h`.
//!   The drift matches the reference construction and is not
//!   re-anchored, keeping coordinates stable for existing parameter
//!   sets.
//!
//! Code cross-refs: `geom::{solve_asa, rotate}`, `grid::outline`.

use super::{CreaseGrid, Grid};
use crate::error::GridError;
use crate::geom::{rotate, solve_asa, Params, Point};

/// Build the `(h+1) x (n+1)` crease grid for `params`.
///
/// Fails fast with [`GridError::InvalidParameter`] on out-of-range
/// parameters, and with [`GridError::DegenerateGeometry`] if a triangle
/// solve collapses (possible only at the extreme edge of the valid
/// ranges). Never returns a partial grid.
pub fn build_crease_grid(params: Params) -> Result<CreaseGrid, GridError> {
    params.validate()?;
    let Params {
        n,
        rho,
        sigma,
        h,
        size,
    } = params;
    let gamma = params.gamma();
    let delta = params.delta();

    // Bases of the first row's second triangle; the first triangle
    // spans (0, 0) .. (size, 0).
    let mut v1 = Point::new(size, 0.0);
    let mut v2 = rotate(Point::new(2.0 * size, 0.0), rho, v1);

    let mut rows: Vec<Vec<Point>> = Vec::with_capacity(h + 1);
    for j in 0..=h {
        // Apex of the isosceles triangle over v1-v2 with base angles
        // delta. Its apex angle is rho, so it is the center carrying
        // each spoke vertex of the row to the next.
        let center = solve_asa(v1, v2, delta, delta).ok_or(GridError::DegenerateGeometry {
            row: j,
            col: 0,
            reason: "row center solve collapsed",
        })?;

        // Index offset -1 gives the row a half-step lead over the
        // bases; the next row's solves read row[0..3].
        let row: Vec<Point> = (0..=n)
            .map(|i| rotate(v1, (i as f64 - 1.0) * rho, center))
            .collect();

        if j < h {
            v1 = solve_asa(row[0], row[1], sigma, gamma).ok_or(GridError::DegenerateGeometry {
                row: j,
                col: 0,
                reason: "row advance solve collapsed",
            })?;
            v2 = solve_asa(row[1], row[2], sigma, gamma).ok_or(GridError::DegenerateGeometry {
                row: j,
                col: 1,
                reason: "row advance solve collapsed",
            })?;
        }
        rows.push(row);
    }
    Ok(Grid { rows })
}

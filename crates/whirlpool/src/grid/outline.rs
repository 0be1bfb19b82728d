//! Outline builder: derives the flat-paper boundary from the crease
//! grid by rigidly chaining a per-row seed quadrilateral.
//!
//! Model
//! - Per row strip `j`, a seed quad `(a, b, c, d)` is read from crease
//!   rows `j` and `j+1`; `d` unfolds the paper corner by mirroring the
//!   second crease vertex across the `a`-`c` diagonal.
//! - Strips are aligned to each other by an explicit fold:
//!   [`AlignState`] carries the previous strip's attachment point and
//!   shared-edge direction, and [`align`] yields the rigidly
//!   transformed quad together with the next state.
//! - Within a strip the quad "rolls" column to column: translate by
//!   `a -> d`, turn so the moved `a -> b` edge falls on the previous
//!   `d -> c` edge, and hand the shared edge over verbatim, so adjacent
//!   tiles match exactly up to floating-point error.
//!
//! Code cross-refs: `grid::crease`, `geom::{reflect, rotate, normalize_angle}`.

use super::crease::build_crease_grid;
use super::{Grid, OutlineGrid};
use crate::error::GridError;
use crate::geom::{normalize_angle, reflect, rotate, Params, Point};

/// One boundary quadrilateral. `a`, `d` lie on the strip's upper grid
/// line, `b`, `c` on the lower one.
#[derive(Clone, Copy, Debug)]
pub(super) struct Quad {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Quad {
    fn translate(self, shift: Point) -> Quad {
        Quad {
            a: self.a + shift,
            b: self.b + shift,
            c: self.c + shift,
            d: self.d + shift,
        }
    }

    fn rotate_about(self, pivot: Point, angle: f64) -> Quad {
        Quad {
            a: rotate(self.a, angle, pivot),
            b: rotate(self.b, angle, pivot),
            c: rotate(self.c, angle, pivot),
            d: rotate(self.d, angle, pivot),
        }
    }
}

/// Loop-carried alignment state between consecutive strips.
#[derive(Clone, Copy, Debug)]
pub(super) struct AlignState {
    /// Post-transform `b` of the previous strip; the next strip's `a`
    /// attaches here.
    pub origin: Point,
    /// Direction angle of the previous strip's `b -> c` edge.
    pub edge_dir: f64,
}

/// Build the `(h+1) x (n+1)` outline grid for `params`.
///
/// Recomputes its own crease grid rather than taking one from the
/// caller: alignment needs each strip's seed in its untransformed
/// per-row pose. Same preconditions as [`build_crease_grid`], plus
/// [`GridError::DegenerateGeometry`] when an unfold reflection loses
/// its axis (boundary values of `rho`/`sigma` that collapse a triangle).
pub fn build_outline_grid(params: Params) -> Result<OutlineGrid, GridError> {
    let t = build_crease_grid(params)?;
    let (n, h) = (params.n, params.h);

    let mut rows: Vec<Vec<Point>> = Vec::with_capacity(h + 1);
    let mut state: Option<AlignState> = None;
    let mut last_lower: Vec<Point> = Vec::new();

    for j in 0..h {
        let seed = seed_quad(&t, j)?;
        let (next_state, quad) = align(state, seed);
        state = Some(next_state);

        let (upper, lower) = roll_strip(quad, n);
        rows.push(upper);
        last_lower = lower;
    }
    // The last strip's lower chain closes the grid to h+1 rows.
    rows.push(last_lower);
    Ok(Grid { rows })
}

/// Seed quadrilateral for strip `j`, in crease-grid pose.
pub(super) fn seed_quad(t: &Grid, j: usize) -> Result<Quad, GridError> {
    let a = t.rows[j][0];
    let b = t.rows[j + 1][0];
    let c = t.rows[j + 1][1];
    let d = reflect(t.rows[j][1], a, c).ok_or(GridError::DegenerateGeometry {
        row: j,
        col: 0,
        reason: "unfold axis has zero length",
    })?;
    Ok(Quad { a, b, c, d })
}

/// Align `quad` onto the previous strip: translate `a` onto the
/// recorded origin, then turn about `a` until `a -> d` runs along the
/// previous `b -> c` direction (the shared-edge continuity constraint
/// between stacked strips). Returns the state for the next strip.
pub(super) fn align(state: Option<AlignState>, quad: Quad) -> (AlignState, Quad) {
    let quad = match state {
        None => quad,
        Some(prev) => {
            let moved = quad.translate(prev.origin - quad.a);
            let turn = normalize_angle(prev.edge_dir - angle_of(moved.d - moved.a));
            moved.rotate_about(moved.a, turn)
        }
    };
    let next = AlignState {
        origin: quad.b,
        edge_dir: angle_of(quad.c - quad.b),
    };
    (next, quad)
}

/// Roll the aligned quad across the strip's `n` cells, collecting the
/// upper (`a`, closing `d`) and lower (`b`, closing `c`) boundary
/// chains, each of `n+1` points.
pub(super) fn roll_strip(quad: Quad, n: usize) -> (Vec<Point>, Vec<Point>) {
    let mut upper = Vec::with_capacity(n + 1);
    let mut lower = Vec::with_capacity(n + 1);
    let Quad {
        mut a,
        mut b,
        mut c,
        mut d,
    } = quad;
    for _ in 0..n {
        upper.push(a);
        lower.push(b);
        // Translate by a -> d (sending a onto d), then turn the moved
        // copy about d so its a -> b edge falls on d -> c; the shared
        // edge is handed over verbatim.
        let shift = d - a;
        let (nb, nc, nd) = (b + shift, c + shift, d + shift);
        let turn = normalize_angle(angle_of(c - d) - angle_of(nb - d));
        let (c2, d2) = (rotate(nc, turn, d), rotate(nd, turn, d));
        a = d;
        b = c;
        c = c2;
        d = d2;
    }
    upper.push(a);
    lower.push(b);
    (upper, lower)
}

#[inline]
fn angle_of(v: Point) -> f64 {
    v.y.atan2(v.x)
}

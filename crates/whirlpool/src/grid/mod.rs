//! Point grids produced by the engine.
//!
//! [`Grid`] is a row-major table of points. [`CreaseGrid`] and
//! [`OutlineGrid`] name the two grids of the engine contract; both have
//! the `(h+1) x (n+1)` shape and the same consumer-facing structure, so
//! they alias one table type.

mod crease;
mod outline;

pub use crease::build_crease_grid;
pub use outline::build_outline_grid;

use crate::geom::Point;

/// Row-major rectangular table of planar points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    pub rows: Vec<Vec<Point>>,
}

/// Crease-vertex grid: row `j` lies on a common circular arc of angular
/// step `rho` around a row-specific center, and consecutive rows are
/// related by the ASA recurrence of [`build_crease_grid`].
pub type CreaseGrid = Grid;

/// Paper-outline grid: each row strip is a rigid copy of a repeating
/// seed quadrilateral, chained so adjacent copies share an edge.
pub type OutlineGrid = Grid;

impl Grid {
    /// `(rows, cols)`; `(0, 0)` when empty.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.rows.len(),
            self.rows.first().map_or(0, |row| row.len()),
        )
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Point>] {
        &self.rows
    }

    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Axis-aligned bounding box `(min, max)`, or `None` for an empty
    /// grid. The rendering collaborator derives its display state
    /// (center, zoom) from this in a stateless step.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let mut pts = self.rows.iter().flatten();
        let first = *pts.next()?;
        let (mut min, mut max) = (first, first);
        for p in pts {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests;

//! Display-state computation for the rendering side.
//!
//! The engine hands back plain point grids; whatever draws them holds
//! its own zoom/center state, derived here in a stateless step from the
//! grid's bounding box. `apply` maps model coordinates to a pixel frame
//! with the origin top-left and the y axis pointing down.

use whirlpool::{Grid, Point};

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub zoom: f64,
}

impl Viewport {
    /// Center on the grid's bounding box and pick the largest zoom that
    /// keeps the figure plus `margin` pixels inside `width x height`.
    /// `None` for an empty grid.
    pub fn fit(grid: &Grid, width: f64, height: f64, margin: f64) -> Option<Viewport> {
        let (min, max) = grid.bounding_box()?;
        let center = (min + max) / 2.0;
        let zoom = f64::min(
            width / (max.x - min.x + 2.0 * margin),
            height / (max.y - min.y + 2.0 * margin),
        );
        Some(Viewport {
            width,
            height,
            center,
            zoom,
        })
    }

    /// Model point to pixel coordinates.
    pub fn apply(&self, p: Point) -> Point {
        let x = (p.x - self.center.x) * self.zoom + self.width / 2.0;
        let y = (p.y - self.center.y) * self.zoom;
        Point::new(x, self.height - (y + self.height / 2.0))
    }
}

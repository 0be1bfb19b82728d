//! Planar geometry engine for "whirlpool" twist-fold tessellations.
//!
//! Given a polygon order `n`, a twist angle `rho`, a diagonal fold angle
//! `sigma`, a row count `h`, and a base unit size, the crate computes the
//! exact 2D coordinates of every crease vertex ([`CreaseGrid`]) and the
//! boundary polygon the flat sheet must have to fold into the pattern
//! ([`OutlineGrid`]).
//!
//! The engine is purely functional: each call recomputes its grid from
//! the parameter set, no state is shared between invocations, and all
//! failures are deterministic functions of the inputs. Rendering,
//! styling, and file export belong to callers, which consume the grids
//! as plain point tables.
//!
//! All angles are radians internally; callers holding degrees convert
//! before building a [`Params`].

pub mod error;
pub mod geom;
pub mod grid;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GridError;
pub use geom::{Params, Point};
pub use grid::{build_crease_grid, build_outline_grid, CreaseGrid, Grid, OutlineGrid};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GridError;
    pub use crate::geom::{
        distance, interpolate, normalize_angle, reflect, rotate, solve_asa, Params, Point,
    };
    pub use crate::grid::{
        build_crease_grid, build_outline_grid, CreaseGrid, Grid, OutlineGrid,
    };
    pub use nalgebra::Vector2 as Vec2;
}

//! 2D geometry layer: types and the pure primitives the grid builders
//! are assembled from.
//!
//! - `types`: the `Point` alias and `Params` with range validation.
//! - `primitives`: distance, interpolation, rotation, reflection, the
//!   ASA triangle solver, and the single angle-normalization helper.
//!
//! Code cross-refs: `grid::crease`, `grid::outline`.

mod primitives;
mod types;

pub use primitives::{distance, interpolate, normalize_angle, reflect, rotate, solve_asa};
pub use types::{Params, Point};

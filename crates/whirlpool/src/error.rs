//! Engine error conditions.
//!
//! Two non-recoverable conditions:
//! - [`GridError::InvalidParameter`]: a structural precondition on the
//!   parameter set is violated; raised before any geometry is computed.
//! - [`GridError::DegenerateGeometry`]: an internal reflection or
//!   triangle construction became numerically undefined, attributed to
//!   the grid cell that triggered it.
//!
//! The engine never returns a partial grid alongside an error, and never
//! retries or approximates around a degeneracy; clamping parameters back
//! into range is a caller concern.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A precondition on `(n, rho, sigma, h, size)` is violated.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A reflection or ASA construction is numerically undefined at the
    /// given grid cell.
    #[error("degenerate geometry at row {row}, col {col}: {reason}")]
    DegenerateGeometry {
        row: usize,
        col: usize,
        reason: &'static str,
    },
}

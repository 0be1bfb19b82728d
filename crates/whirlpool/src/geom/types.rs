//! Parameter set and point type for the tessellation engine.

use crate::error::GridError;
use nalgebra::Vector2;
use std::f64::consts::PI;

/// A planar point `(x, y)`. Value type; nalgebra vector ops apply.
pub type Point = Vector2<f64>;

/// Slack on the closed upper angle bounds, so documented boundary values
/// (e.g. `rho = 180/n` degrees) survive degree-to-radian rounding.
const RANGE_SLACK: f64 = 1e-9;

/// Whirlpool tessellation parameters. Angles are radians.
///
/// Valid ranges, checked by [`Params::validate`]:
/// - `n >= 3` — polygon order (number of radial spokes),
/// - `0 < rho <= pi/n` — twist angle per spoke,
/// - `0 < sigma <= (pi - 2*pi/n)/2` — diagonal fold angle,
/// - `h >= 1` — tessellation rows,
/// - `size > 0`, finite — length of the first triangle edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    pub n: usize,
    pub rho: f64,
    pub sigma: f64,
    pub h: usize,
    pub size: f64,
}

impl Params {
    #[inline]
    pub fn new(n: usize, rho: f64, sigma: f64, h: usize, size: f64) -> Self {
        Self {
            n,
            rho,
            sigma,
            h,
            size,
        }
    }

    /// Check all structural preconditions; the first violation wins and
    /// is reported before any geometry is computed.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.n < 3 {
            return Err(GridError::InvalidParameter {
                name: "n",
                value: self.n as f64,
                reason: "polygon order must be at least 3",
            });
        }
        if self.h < 1 {
            return Err(GridError::InvalidParameter {
                name: "h",
                value: self.h as f64,
                reason: "row count must be at least 1",
            });
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(GridError::InvalidParameter {
                name: "size",
                value: self.size,
                reason: "unit size must be positive and finite",
            });
        }
        let rho_max = PI / self.n as f64;
        if !self.rho.is_finite() || self.rho <= 0.0 || self.rho > rho_max + RANGE_SLACK {
            return Err(GridError::InvalidParameter {
                name: "rho",
                value: self.rho,
                reason: "twist angle must lie in (0, pi/n]",
            });
        }
        let sigma_max = (PI - 2.0 * PI / self.n as f64) / 2.0;
        if !self.sigma.is_finite() || self.sigma <= 0.0 || self.sigma > sigma_max + RANGE_SLACK {
            return Err(GridError::InvalidParameter {
                name: "sigma",
                value: self.sigma,
                reason: "fold angle must lie in (0, (pi - 2*pi/n)/2]",
            });
        }
        Ok(())
    }

    /// Base angle `pi/2 - rho/2` of the isosceles solve locating a
    /// row's rotation center.
    #[inline]
    pub(crate) fn delta(&self) -> f64 {
        PI / 2.0 - self.rho / 2.0
    }

    /// Spoke half-angle `rho/2 + pi/n`.
    #[inline]
    pub(crate) fn beta(&self) -> f64 {
        self.rho / 2.0 + PI / self.n as f64
    }

    /// Row-advance angle `pi - sigma - beta`.
    #[inline]
    pub(crate) fn gamma(&self) -> f64 {
        PI - self.sigma - self.beta()
    }
}

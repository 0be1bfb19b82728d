//! Pure 2D primitives underlying the grid builders.
//!
//! All functions are stateless. Degeneracies return `None`; the builders
//! map them to [`crate::error::GridError::DegenerateGeometry`] since
//! only they know which grid cell was under construction.

use super::types::Point;
use std::f64::consts::{PI, TAU};

/// Zero-length guard for reflection axes and ASA baselines.
const EPS_LEN: f64 = 1e-12;
/// Guard on `sin(gamma)` in the ASA solve (`gamma` near 0 or pi).
const EPS_SIN: f64 = 1e-12;

/// Euclidean distance between `p1` and `p2`.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

/// Point at fraction `c` along the segment `p1 -> p2`.
///
/// `c` outside `[0, 1]` extrapolates beyond the segment; the ASA solver
/// relies on this when the solved side exceeds the baseline.
#[inline]
pub fn interpolate(p1: Point, p2: Point, c: f64) -> Point {
    p1 + (p2 - p1) * c
}

/// Rotate `p` by `angle` radians counter-clockwise around `pivot`.
#[inline]
pub fn rotate(p: Point, angle: f64, pivot: Point) -> Point {
    let (s, co) = angle.sin_cos();
    let v = p - pivot;
    pivot + Point::new(v.x * co - v.y * s, v.x * s + v.y * co)
}

/// Mirror of `p` across the infinite line through `a` and `b`, via
/// orthogonal projection onto the line followed by point reflection.
///
/// `None` when `a == b` within tolerance: a zero-length axis has no
/// defined direction.
pub fn reflect(p: Point, a: Point, b: Point) -> Option<Point> {
    let axis = b - a;
    let len2 = axis.norm_squared();
    if !len2.is_finite() || len2 < EPS_LEN * EPS_LEN {
        return None;
    }
    let foot = a + axis * ((p - a).dot(&axis) / len2);
    Some(foot + (foot - p))
}

/// Third vertex of a triangle from the base vertices `pa`, `pb` and the
/// interior angles `alpha` at `pa` and `beta` at `pb` (angle-side-angle).
///
/// With `gamma = pi - alpha - beta` and `c = |pa - pb|`, the law of
/// sines gives the side `pa -> pc` length `b = c * sin(beta) / sin(gamma)`;
/// the vertex is the point at fraction `b/c` along `pa -> pb`, rotated by
/// `alpha` about `pa`. `None` when the baseline is zero-length or
/// `sin(gamma)` vanishes (degenerate triangle).
pub fn solve_asa(pa: Point, pb: Point, alpha: f64, beta: f64) -> Option<Point> {
    let gamma = PI - alpha - beta;
    let sin_gamma = gamma.sin();
    if !sin_gamma.is_finite() || sin_gamma.abs() < EPS_SIN {
        return None;
    }
    let c = distance(pa, pb);
    if c < EPS_LEN {
        return None;
    }
    let b = c * beta.sin() / sin_gamma;
    Some(rotate(interpolate(pa, pb, b / c), alpha, pa))
}

/// Canonical representative of `theta` in `[0, 2*pi)`.
///
/// The single angle-wrapping helper; every turn angle in the outline
/// builder passes through here before being applied as a CCW rotation.
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let mut t = theta % TAU;
    if t < 0.0 {
        t += TAU;
    }
    // `t + TAU` can round back up to TAU for tiny negative inputs.
    if t >= TAU {
        t -= TAU;
    }
    t
}

//! Timing probe for a realistic whirlpool parameter set.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for "how long does a
//!   grid build take" at a tessellation depth a designer would actually
//!   print (n = 6, twelve rows).
//! - Dump the figure extent as a quick sanity check against the expected
//!   spiral footprint.

use std::f64::consts::PI;
use std::time::Instant;

use whirlpool::{build_crease_grid, build_outline_grid, Params};

fn main() {
    let params = Params::new(6, 20.0 * PI / 180.0, 30.0 * PI / 180.0, 12, 100.0);

    let start = Instant::now();
    let crease = build_crease_grid(params).expect("valid parameters");
    let crease_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let outline = build_outline_grid(params).expect("valid parameters");
    let outline_ms = start.elapsed().as_secs_f64() * 1e3;

    let (rows, cols) = crease.shape();
    println!("crease shape={rows}x{cols} time_ms={crease_ms:.3}");
    let (rows, cols) = outline.shape();
    println!("outline shape={rows}x{cols} time_ms={outline_ms:.3}");

    if let Some((min, max)) = outline.bounding_box() {
        println!(
            "outline bbox=({:.3}, {:.3})..({:.3}, {:.3})",
            min.x, min.y, max.x, max.y
        );
    }
}

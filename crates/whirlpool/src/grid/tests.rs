use super::outline::{align, roll_strip, seed_quad, AlignState, Quad};
use super::*;
use crate::error::GridError;
use crate::geom::{distance, rotate, Params, Point};
use std::f64::consts::PI;

fn deg(d: f64) -> f64 {
    d * PI / 180.0
}

/// The boundary scenario of the engine contract: n=6, rho=20 deg,
/// sigma=30 deg, h=3, size=100.
fn classic() -> Params {
    Params::new(6, deg(20.0), deg(30.0), 3, 100.0)
}

/// Circumcenter of three non-collinear points.
fn circumcenter(p: Point, q: Point, r: Point) -> Point {
    let d = 2.0 * (p.x * (q.y - r.y) + q.x * (r.y - p.y) + r.x * (p.y - q.y));
    assert!(d.abs() > 1e-12, "collinear row points");
    let (p2, q2, r2) = (p.norm_squared(), q.norm_squared(), r.norm_squared());
    Point::new(
        (p2 * (q.y - r.y) + q2 * (r.y - p.y) + r2 * (p.y - q.y)) / d,
        (p2 * (r.x - q.x) + q2 * (p.x - r.x) + r2 * (q.x - p.x)) / d,
    )
}

#[test]
fn crease_grid_has_contract_shape_and_is_finite() {
    let grid = build_crease_grid(classic()).unwrap();
    assert_eq!(grid.shape(), (4, 7));
    assert!(grid.rows().iter().all(|row| row.len() == 7));
    assert!(grid.is_finite());
}

#[test]
fn crease_grid_first_row_matches_seed_construction() {
    let params = classic();
    let grid = build_crease_grid(params).unwrap();
    // Index offset -1: column 1 is v1 itself, column 2 its rho-rotate,
    // which by construction is v2.
    let v1 = Point::new(100.0, 0.0);
    let v2 = rotate(Point::new(200.0, 0.0), params.rho, v1);
    assert!((grid.rows[0][1] - v1).norm() < 1e-9);
    assert!((grid.rows[0][2] - v2).norm() < 1e-9);
}

#[test]
fn crease_rows_lie_on_common_arc_with_step_rho() {
    let params = classic();
    let grid = build_crease_grid(params).unwrap();
    for row in grid.rows() {
        let center = circumcenter(row[0], row[1], row[2]);
        let r0 = distance(center, row[0]);
        for (i, p) in row.iter().enumerate() {
            let r = distance(center, *p);
            assert!(
                (r - r0).abs() < 1e-9 * r0.max(1.0),
                "radius drift at col {i}: {r} vs {r0}"
            );
        }
        // Consecutive points are one rho-rotation apart about the center.
        for i in 0..row.len() - 1 {
            let turned = rotate(row[i], params.rho, center);
            assert!(
                (turned - row[i + 1]).norm() < 1e-6,
                "angular step broken at col {i}"
            );
        }
    }
}

#[test]
fn crease_grid_rejects_invalid_parameters_before_computing() {
    let err = build_crease_grid(Params::new(2, deg(20.0), deg(30.0), 3, 100.0)).unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { name: "n", .. }));

    let err = build_crease_grid(Params::new(6, deg(20.0), deg(30.0), 0, 100.0)).unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { name: "h", .. }));

    let err = build_crease_grid(Params::new(6, deg(20.0), deg(30.0), 3, -1.0)).unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { name: "size", .. }));

    let err = build_crease_grid(Params::new(6, deg(31.0), deg(30.0), 3, 100.0)).unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { name: "rho", .. }));

    let err = build_crease_grid(Params::new(6, deg(20.0), deg(61.0), 3, 100.0)).unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { name: "sigma", .. }));
}

#[test]
fn crease_grid_at_maximum_rho_stays_finite() {
    // rho = 180/n degrees is the edge of the valid range, not over it.
    let params = Params::new(6, deg(30.0), deg(30.0), 3, 100.0);
    let grid = build_crease_grid(params).unwrap();
    assert_eq!(grid.shape(), (4, 7));
    assert!(grid.is_finite());
    let outline = build_outline_grid(params).unwrap();
    assert_eq!(outline.shape(), (4, 7));
    assert!(outline.is_finite());
}

#[test]
fn outline_grid_has_crease_shape_and_is_finite() {
    let outline = build_outline_grid(classic()).unwrap();
    assert_eq!(outline.shape(), (4, 7));
    assert!(outline.rows().iter().all(|row| row.len() == 7));
    assert!(outline.is_finite());
}

#[test]
fn outline_strips_tile_without_gaps() {
    let params = classic();
    let t = build_crease_grid(params).unwrap();
    let mut state: Option<AlignState> = None;
    let mut prev: Option<Quad> = None;
    for j in 0..params.h {
        let (next, quad) = align(state, seed_quad(&t, j).unwrap());
        state = Some(next);
        if let Some(prev) = prev {
            // Attachment point is the previous strip's b, and the shared
            // a->d edge runs along the previous b->c edge.
            assert!((quad.a - prev.b).norm() < 1e-9, "strip {j} detached");
            assert!(
                (quad.d - prev.c).norm() < 1e-6,
                "strip {j} shared edge mismatch"
            );
        }
        prev = Some(quad);
    }
}

#[test]
fn outline_strips_roll_rigidly() {
    let params = classic();
    let t = build_crease_grid(params).unwrap();
    let mut state: Option<AlignState> = None;
    for j in 0..params.h {
        let (next, quad) = align(state, seed_quad(&t, j).unwrap());
        state = Some(next);
        let (upper, lower) = roll_strip(quad, params.n);
        assert_eq!(upper.len(), params.n + 1);
        assert_eq!(lower.len(), params.n + 1);

        // Every rolled copy preserves the seed's edge lengths.
        let ad = distance(quad.a, quad.d);
        let bc = distance(quad.b, quad.c);
        for i in 0..params.n {
            let u = distance(upper[i], upper[i + 1]);
            let l = distance(lower[i], lower[i + 1]);
            assert!(
                (u - ad).abs() < 1e-9 * ad.max(1.0),
                "strip {j}: upper edge {i} drifted"
            );
            assert!(
                (l - bc).abs() < 1e-9 * bc.max(1.0),
                "strip {j}: lower edge {i} drifted"
            );
        }
        // First vertical edge is the seed's a-b, the handed-over ones d-c.
        let ab = distance(quad.a, quad.b);
        let dc = distance(quad.d, quad.c);
        assert!((distance(upper[0], lower[0]) - ab).abs() < 1e-9 * ab.max(1.0));
        for i in 1..=params.n {
            let v = distance(upper[i], lower[i]);
            assert!(
                (v - dc).abs() < 1e-9 * dc.max(1.0),
                "strip {j}: vertical edge {i} drifted"
            );
        }
    }
}

#[test]
fn outline_last_row_is_last_strip_lower_chain() {
    let params = classic();
    let outline = build_outline_grid(params).unwrap();

    let t = build_crease_grid(params).unwrap();
    let mut state: Option<AlignState> = None;
    let mut lower = Vec::new();
    for j in 0..params.h {
        let (next, quad) = align(state, seed_quad(&t, j).unwrap());
        state = Some(next);
        let (upper, low) = roll_strip(quad, params.n);
        for (p, q) in upper.iter().zip(outline.rows[j].iter()) {
            assert!((p - q).norm() < 1e-12);
        }
        lower = low;
    }
    for (p, q) in lower.iter().zip(outline.rows[params.h].iter()) {
        assert!((p - q).norm() < 1e-12);
    }
}

#[test]
fn grids_are_deterministic() {
    let params = classic();
    assert_eq!(
        build_crease_grid(params).unwrap(),
        build_crease_grid(params).unwrap()
    );
    assert_eq!(
        build_outline_grid(params).unwrap(),
        build_outline_grid(params).unwrap()
    );
}

#[test]
fn bounding_box_covers_all_points() {
    let grid = build_crease_grid(classic()).unwrap();
    let (min, max) = grid.bounding_box().unwrap();
    for p in grid.rows().iter().flatten() {
        assert!(p.x >= min.x - 1e-12 && p.x <= max.x + 1e-12);
        assert!(p.y >= min.y - 1e-12 && p.y <= max.y + 1e-12);
    }
    assert!(Grid::default().bounding_box().is_none());
}

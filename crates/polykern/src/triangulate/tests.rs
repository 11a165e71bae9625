use super::*;
use crate::geom2::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use proptest::prelude::*;

fn comb() -> Polygon2 {
    Polygon2::from_xy(&[
        0.0, 0.0, 5.0, 0.0, 5.0, 3.0, 4.0, 3.0, 4.0, 1.0, 3.0, 1.0, 3.0, 3.0, 2.0, 3.0, 2.0, 1.0,
        1.0, 1.0, 1.0, 3.0, 0.0, 3.0,
    ])
}

/// Count, index coverage, per-triangle orientation and area conservation.
fn check_triangulation(poly: &Polygon2, tris: &[IndexTriple]) {
    let n = poly.len();
    assert_eq!(tris.len(), n - 2, "wrong triangle count for {:?}", poly);
    let mut used = vec![false; n];
    let sign = if poly.is_ccw() { 1.0 } else { -1.0 };
    let mut sum = 0.0;
    for t in tris {
        let [a, b, c] = t.as_array();
        assert!(a != b && b != c && a != c, "degenerate triple {:?}", t);
        used[a] = true;
        used[b] = true;
        used[c] = true;
        let area = t.signed_area_in(&poly.vertices);
        assert!(sign * area >= -1e-12, "triangle {:?} flipped: {}", t, area);
        sum += area;
    }
    assert!(used.iter().all(|&u| u), "some vertex never used");
    let expected = poly.signed_area();
    assert!(
        (sum - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "area {} vs {}",
        sum,
        expected
    );
}

#[test]
fn fewer_than_three_vertices_emit_nothing() {
    assert!(triangulate(&Polygon2::new()).is_empty());
    assert!(triangulate(&Polygon2::from_xy(&[0.0, 0.0, 1.0, 0.0])).is_empty());
}

#[test]
fn triangle_is_passed_through() {
    let tri = Polygon2::from_xy(&[2.0, 0.0, 2.0, 2.0, 1.0, 5.0]);
    assert_eq!(triangulate(&tri), vec![IndexTriple::new(0, 1, 2)]);
}

#[test]
fn unit_square_gives_two_known_triangles() {
    let sq = Polygon2::from_xy(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    let tris = triangulate(&sq);
    assert_eq!(
        tris,
        vec![IndexTriple::new(3, 0, 1), IndexTriple::new(1, 2, 3)]
    );
    check_triangulation(&sq, &tris);

    let cw = sq.flipped();
    let tris_cw = triangulate(&cw);
    check_triangulation(&cw, &tris_cw);
}

#[test]
fn comb_polygon_conserves_area() {
    let poly = comb();
    assert!((poly.signed_area() - 11.0).abs() < 1e-12);
    let tris = triangulate(&poly);
    check_triangulation(&poly, &tris);

    let cw = poly.flipped();
    check_triangulation(&cw, &triangulate(&cw));
}

#[test]
fn collinear_vertices_on_an_edge() {
    let poly = Polygon2::from_xy(&[0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0]);
    let tris = triangulate(&poly);
    check_triangulation(&poly, &tris);
}

#[test]
fn known_order_matches_detected_order() {
    let poly = comb();
    let mut auto = Vec::new();
    let mut pinned = Vec::new();
    let mut tri = EarClipping::default();
    tri.process(&poly, &mut auto);
    tri.set_known_order(Some(true));
    assert_eq!(tri.known_order(), Some(true));
    tri.process(&poly, &mut pinned);
    assert_eq!(auto, pinned);

    let cw = poly.flipped();
    tri.set_known_order(Some(false));
    tri.process(&cw, &mut pinned);
    check_triangulation(&cw, &pinned);
}

#[test]
fn vertex_pool_is_reused() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(40),
        ..RadialCfg::default()
    };
    let big = draw_star_polygon(cfg, ReplayToken::new(1, 0));
    let mut tri = EarClipping::default();
    let mut out = Vec::new();
    tri.process(&big, &mut out);
    assert_eq!(tri.pool_capacity(), 40);
    tri.process(&comb(), &mut out);
    check_triangulation(&comb(), &out);
    tri.process(&big, &mut out);
    check_triangulation(&big, &out);
    assert_eq!(tri.pool_capacity(), 40);
}

#[test]
fn random_star_polygons() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 60 },
        angle_jitter_frac: 0.4,
        radial_jitter: 0.6,
        base_radius: 3.0,
        random_phase: true,
    };
    let mut tri = EarClipping::default();
    let mut out = Vec::new();
    for i in 0..60 {
        let poly = draw_star_polygon(cfg, ReplayToken::new(2024, i));
        tri.process(&poly, &mut out);
        check_triangulation(&poly, &out);
        let cw = poly.flipped();
        tri.process(&cw, &mut out);
        check_triangulation(&cw, &out);
    }
}

proptest! {
    #[test]
    fn star_polygons_yield_n_minus_two(seed in any::<u64>(), n in 4usize..40) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken::new(seed, 0));
        let tris = triangulate(&poly);
        prop_assert_eq!(tris.len(), n - 2);
        let sum: f64 = tris.iter().map(|t| t.signed_area_in(&poly.vertices)).sum();
        prop_assert!((sum - poly.signed_area()).abs() < 1e-9);
    }
}

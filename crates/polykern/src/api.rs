//! Curated entry points, grouped by capability.
//!
//! Prefer these re-exports in callers that only need the kernel operations.

// Shared types and predicates
pub use crate::geom2::predicates::{area_sign, cross, orientation_sign, subtract_then_cross};
pub use crate::geom2::{GeomCfg, IndexTriple, Polygon2, Rect2};
// Convex hulls
pub use crate::hull::{
    convex_hull, AndrewMonotone, ConvexHull, GrahamScan, GrahamScanCollinear, HullAlgo,
    ParseHullAlgoError,
};
// Triangulation
pub use crate::triangulate::{triangulate, EarClipping, VertexRing};
// Convex intersection
pub use crate::intersect::{convex_intersection, intersection_area, AreaSweep, ConvexClip, GAMUT};

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn end_to_end_hull_triangulate_intersect() {
        let cloud = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 1.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![1.0, 3.0],
        ];
        let hull = convex_hull(&cloud, HullAlgo::GrahamScan);
        assert_eq!(hull.len(), 4);

        let tris = triangulate(&hull);
        assert_eq!(tris.len(), 2);
        let tri_area: f64 = tris.iter().map(|t| t.signed_area_in(&hull.vertices)).sum();
        assert!((tri_area - 16.0).abs() < 1e-12);

        let shifted = Polygon2::from_points(hull.vertices.iter().map(|v| v + vector![2.0, 2.0]));
        let clip = convex_intersection(&hull, &shifted).expect("overlap");
        assert!((clip.area() - 4.0).abs() < 1e-12);
        assert!((intersection_area(&hull, &shifted) - 4.0).abs() < 1e-5);
    }
}

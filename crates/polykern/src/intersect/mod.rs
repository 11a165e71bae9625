//! Intersection of two convex polygons.
//!
//! Purpose
//! - `ConvexClip`: the intersection polygon, by an advancing two-cursor walk
//!   over both boundaries (O(n + m)).
//! - `AreaSweep`: only the signed intersection area, computed on a shared
//!   fixed-point grid so that boundary ties cannot destabilize the predicates
//!   (O(n·m) edge pairs, pruned by edge bounding spans).
//!
//! The two engines are independent; neither calls the other.
//!
//! Known gap
//! - `ConvexClip` reports `false` both when the polygons are disjoint and when
//!   one contains the other. It does not try to tell these apart.
//!
//! Code cross-refs: `geom2::predicates::area_sign`, `geom2::{Polygon2, GeomCfg}`

mod area;
mod clip;

pub use area::{AreaSweep, GAMUT};
pub use clip::ConvexClip;

use crate::geom2::{GeomCfg, Polygon2};

/// Intersection polygon of convex `a` and `b` with default tolerances;
/// `None` when the boundaries do not cross (see module notes).
pub fn convex_intersection(a: &Polygon2, b: &Polygon2) -> Option<Polygon2> {
    let mut out = Polygon2::new();
    ConvexClip::new(GeomCfg::default())
        .process(a, b, &mut out)
        .then_some(out)
}

/// Signed area of `a ∩ b` with a fresh `AreaSweep`.
pub fn intersection_area(a: &Polygon2, b: &Polygon2) -> f64 {
    AreaSweep::default().compute(a, b)
}

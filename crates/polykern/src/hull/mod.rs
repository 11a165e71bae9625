//! Convex hulls of unordered point sets.
//!
//! Purpose
//! - Turn an unordered point array into a CCW convex polygon without
//!   collinear triples. Three interchangeable algorithms share one calling
//!   convention: the input slice is reordered in place and the result is
//!   written into a caller-provided buffer.
//!
//! Design
//! - Each algorithm is a small struct owning its scratch stack, reused across
//!   calls. Instances are therefore not safe for concurrent use; keep one per
//!   thread.
//! - Call sites that pick the algorithm at runtime go through `HullAlgo` and
//!   the `ConvexHull` dispatcher instead of a trait object.
//!
//! Code cross-refs: `geom2::predicates::{subtract_then_cross, is_cw}`, `Polygon2`

mod andrew;
mod graham;

pub use andrew::AndrewMonotone;
pub use graham::{GrahamScan, GrahamScanCollinear};

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::geom2::Polygon2;

/// Hull algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HullAlgo {
    #[default]
    AndrewMonotone,
    GrahamScan,
    GrahamScanCollinear,
}

impl HullAlgo {
    pub const ALL: [HullAlgo; 3] = [
        HullAlgo::AndrewMonotone,
        HullAlgo::GrahamScan,
        HullAlgo::GrahamScanCollinear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HullAlgo::AndrewMonotone => "andrew",
            HullAlgo::GrahamScan => "graham",
            HullAlgo::GrahamScanCollinear => "graham-collinear",
        }
    }
}

impl fmt::Display for HullAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseHullAlgoError(pub String);

impl fmt::Display for ParseHullAlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm `{}` (expected andrew, graham or graham-collinear)",
            self.0
        )
    }
}

impl std::error::Error for ParseHullAlgoError {}

impl FromStr for HullAlgo {
    type Err = ParseHullAlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HullAlgo::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseHullAlgoError(s.to_string()))
    }
}

/// Runtime-selectable hull builder holding scratch state for every algorithm.
#[derive(Clone, Debug, Default)]
pub struct ConvexHull {
    andrew: AndrewMonotone,
    graham: GrahamScan,
    collinear: GrahamScanCollinear,
}

impl ConvexHull {
    /// Hull of `points` into `hull` using `algo`; `points` is reordered in place.
    pub fn process(&mut self, algo: HullAlgo, points: &mut [Vector2<f64>], hull: &mut Polygon2) {
        match algo {
            HullAlgo::AndrewMonotone => self.andrew.process(points, hull),
            HullAlgo::GrahamScan => self.graham.process(points, hull),
            HullAlgo::GrahamScanCollinear => self.collinear.process(points, &mut hull.vertices),
        }
    }
}

/// One-shot hull that leaves `points` untouched.
pub fn convex_hull(points: &[Vector2<f64>], algo: HullAlgo) -> Polygon2 {
    let mut work = points.to_vec();
    let mut hull = Polygon2::with_capacity(points.len());
    ConvexHull::default().process(algo, &mut work, &mut hull);
    hull
}

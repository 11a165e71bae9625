//! 2D polygon kernel: convex hulls, ear-clipping triangulation, and
//! convex-convex intersection (clipped polygon or signed area).
//!
//! Conventions
//! - Points are nalgebra `Vector2<f64>` (`Vec2`); polygons are implicitly
//!   closed vertex sequences (`Polygon2`). CCW means positive shoelace area.
//! - Algorithms are small structs owning reusable scratch buffers. They are
//!   not meant to be shared across threads; keep one instance per thread.
//! - Degenerate input (too few points) yields a trivial result, never an
//!   error. Broken internal invariants panic.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod intersect;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_convex_polygon, draw_points_uniform, draw_star_polygon, RadialCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{GeomCfg, IndexTriple, Polygon2, Rect2};
    pub use crate::hull::{convex_hull, ConvexHull, HullAlgo};
    pub use crate::intersect::{convex_intersection, intersection_area, AreaSweep, ConvexClip};
    pub use crate::triangulate::{triangulate, EarClipping};
    pub use nalgebra::Vector2 as Vec2;
}

//! 2D value types and predicates shared by every algorithm in the crate.
//!
//! Purpose
//! - `Vec2` points (nalgebra `Vector2<f64>`), `Polygon2` vertex sequences,
//!   `Rect2` bounds, `IndexTriple` triangles and the `GeomCfg` tolerance bundle.
//! - Orientation and area-sign predicates in `predicates`.
//! - Seeded samplers in `rand` for tests, benches and the CLI.
//!
//! Code cross-refs: `hull`, `triangulate`, `intersect`

mod polygon;
pub mod predicates;
pub mod rand;
mod types;

pub use polygon::Polygon2;
pub use predicates::{area_sign, orientation_sign};
pub use types::{GeomCfg, IndexTriple, Rect2};

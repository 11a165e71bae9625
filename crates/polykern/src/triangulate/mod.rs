//! Simple-polygon triangulation by ear clipping.
//!
//! Purpose
//! - Split a simple polygon of `n` vertices into `n − 2` triangles given as
//!   index triples into the input vertex array.
//!
//! Design
//! - The polygon is copied into an index-linked ring (`ring::VertexRing`);
//!   each vertex carries an "is ear" flag. Clipping an ear only invalidates
//!   the flags of its two neighbors, so only those are recomputed.
//! - Orientation is detected per call unless the caller pins it with
//!   `EarClipping::set_known_order`.
//!
//! Code cross-refs: `geom2::{Polygon2, IndexTriple}`, `geom2::predicates`

mod ear;
pub mod ring;

pub use ear::EarClipping;
pub use ring::VertexRing;

use crate::geom2::{IndexTriple, Polygon2};

/// One-shot triangulation with a fresh triangulator.
pub fn triangulate(polygon: &Polygon2) -> Vec<IndexTriple> {
    let mut out = Vec::with_capacity(polygon.len().saturating_sub(2));
    EarClipping::default().process(polygon, &mut out);
    out
}

#[cfg(test)]
mod tests;

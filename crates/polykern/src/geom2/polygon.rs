//! Ordered vertex polygon (`Polygon2`).
//!
//! Vertex `i` connects to vertex `(i + 1) % n`; the first vertex is not
//! repeated. Orientation is derived on demand from the shoelace sum and never
//! stored.

use nalgebra::Vector2;

use super::predicates::cross;
use super::types::Rect2;

/// Polygon as an ordered, implicitly closed vertex sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2 {
    pub vertices: Vec<Vector2<f64>>,
}

impl Polygon2 {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
        }
    }

    pub fn from_points<I: IntoIterator<Item = Vector2<f64>>>(points: I) -> Self {
        Self {
            vertices: points.into_iter().collect(),
        }
    }

    /// Build from a flat `x0, y0, x1, y1, ...` list. A trailing odd value is ignored.
    pub fn from_xy(coords: &[f64]) -> Self {
        Self {
            vertices: coords
                .chunks_exact(2)
                .map(|c| Vector2::new(c[0], c[1]))
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Vector2<f64> {
        self.vertices[i]
    }

    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.vertices.push(p);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Shoelace area, positive for CCW order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut s = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            s += p.x * q.y - q.x * p.y;
        }
        0.5 * s
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True if the signed area is positive. Degenerate polygons report `false`.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse the vertex order in place (CW ⇄ CCW).
    #[inline]
    pub fn flip(&mut self) {
        self.vertices.reverse();
    }

    pub fn flipped(&self) -> Polygon2 {
        let mut out = self.clone();
        out.flip();
        out
    }

    #[inline]
    pub fn bounding_box(&self) -> Option<Rect2> {
        Rect2::from_points(&self.vertices)
    }

    /// Every turn has the same sign as the winding; collinear turns allowed.
    ///
    /// Assumes a simple polygon (a star that winds twice is not detected).
    pub fn is_convex(&self) -> bool {
        self.turn_signs_ok(false)
    }

    /// Like `is_convex`, but also rejects three consecutive collinear vertices.
    pub fn is_strictly_convex(&self) -> bool {
        self.turn_signs_ok(true)
    }

    fn turn_signs_ok(&self, strict: bool) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let orient = if self.is_ccw() { 1.0 } else { -1.0 };
        for i in 0..n {
            let a = self.vertices[(i + n - 1) % n];
            let b = self.vertices[i];
            let c = self.vertices[(i + 1) % n];
            let t = orient * cross(a, b, c);
            if t < 0.0 || (strict && t == 0.0) {
                return false;
            }
        }
        true
    }

    /// Point-in-convex-polygon test with slack `eps` (boundary counts as inside).
    pub fn contains_convex(&self, p: Vector2<f64>, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let orient = if self.is_ccw() { 1.0 } else { -1.0 };
        (0..n).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            orient * cross(a, b, p) >= -eps
        })
    }
}

impl From<Vec<Vector2<f64>>> for Polygon2 {
    fn from(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }
}

//! Basic 2D value types shared by the hull, triangulation and intersection code.
//!
//! - `GeomCfg`: centralizes the tolerance used by area-sign predicates.
//! - `Rect2`: axis-aligned bounds (used by the fixed-point area sweep).
//! - `IndexTriple`: one output triangle, as indices into the input polygon.
//!
//! References
//! - Code cross-refs: `polygon::Polygon2`, `predicates::area_sign`

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Half-width of the band around zero inside which a cross product counts
    /// as collinear (`area_sign` returns 0).
    pub eps_area: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_area: 1e-12 }
    }
}

impl GeomCfg {
    /// Exact predicates (no tolerance band).
    #[inline]
    pub fn exact() -> Self {
        Self { eps_area: 0.0 }
    }
}

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Rect2 {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds of a point set; `None` if empty.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut r = Rect2::new(first, first);
        for p in &points[1..] {
            r.min.x = r.min.x.min(p.x);
            r.min.y = r.min.y.min(p.y);
            r.max.x = r.max.x.max(p.x);
            r.max.y = r.max.y.max(p.y);
        }
        Some(r)
    }

    /// Smallest rectangle containing both.
    #[inline]
    pub fn union(&self, other: &Rect2) -> Rect2 {
        Rect2 {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Triangle given by three indices into the original polygon's vertex array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexTriple {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl IndexTriple {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Signed area (CCW positive) of the triangle over `verts`.
    ///
    /// Panics if an index is out of range.
    #[inline]
    pub fn signed_area_in(&self, verts: &[Vector2<f64>]) -> f64 {
        let (p, q, r) = (verts[self.a], verts[self.b], verts[self.c]);
        0.5 * super::predicates::cross(p, q, r)
    }
}

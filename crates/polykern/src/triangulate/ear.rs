//! Ear clipping over a `VertexRing`.
//!
//! O(n²): each of the n−2 removals re-tests two ears, and each ear test scans
//! the whole ring for crossing edges.

use nalgebra::Vector2;

use super::ring::{NodeId, VertexRing};
use crate::geom2::predicates::{between_collinear, cross};
use crate::geom2::{IndexTriple, Polygon2};

/// Ear-clipping triangulator. Reuses its vertex pool across calls; not
/// reentrant.
#[derive(Clone, Debug, Default)]
pub struct EarClipping {
    ring: VertexRing,
    known_ccw: Option<bool>,
    /// `1.0` for CCW input, `-1.0` for CW; flips every left-turn test.
    orient: f64,
}

impl EarClipping {
    /// Skip orientation detection and trust `ccw`; `None` restores detection.
    pub fn set_known_order(&mut self, ccw: Option<bool>) {
        self.known_ccw = ccw;
    }

    #[inline]
    pub fn known_order(&self) -> Option<bool> {
        self.known_ccw
    }

    /// Slots held by the vertex pool.
    #[inline]
    pub fn pool_capacity(&self) -> usize {
        self.ring.pool_capacity()
    }

    /// Triangulate a simple polygon into `out` (cleared first).
    ///
    /// Emits `n − 2` triangles for `n >= 3` vertices, none for fewer.
    /// Self-intersecting input is out of contract; if no ear can be found the
    /// triangles emitted so far are returned.
    pub fn process(&mut self, polygon: &Polygon2, out: &mut Vec<IndexTriple>) {
        out.clear();
        let n = polygon.len();
        if n < 3 {
            return;
        }
        if n == 3 {
            out.push(IndexTriple::new(0, 1, 2));
            return;
        }
        let ccw = self.known_ccw.unwrap_or_else(|| polygon.is_ccw());
        self.orient = if ccw { 1.0 } else { -1.0 };

        self.ring.clear();
        for (i, p) in polygon.vertices.iter().enumerate() {
            self.ring.push_tail(*p, i);
        }
        let ids: Vec<NodeId> = self.ring.iter().collect();
        for id in ids {
            self.update_ear(id);
        }

        while self.ring.len() > 3 {
            let Some(ear) = self.ring.iter().find(|&id| self.ring.get(id).ear) else {
                return;
            };
            let prev = self.ring.prev(ear);
            let next = self.ring.next(ear);
            out.push(IndexTriple::new(
                self.ring.get(prev).index,
                self.ring.get(ear).index,
                self.ring.get(next).index,
            ));
            self.ring.remove(ear);
            self.update_ear(prev);
            self.update_ear(next);
        }

        if let Some(h) = self.ring.head() {
            let b = self.ring.next(h);
            let c = self.ring.next(b);
            out.push(IndexTriple::new(
                self.ring.get(h).index,
                self.ring.get(b).index,
                self.ring.get(c).index,
            ));
        }
    }

    fn update_ear(&mut self, id: NodeId) {
        let ear = self.is_diagonal(self.ring.prev(id), self.ring.next(id));
        self.ring.get_mut(id).ear = ear;
    }

    #[inline]
    fn pt(&self, id: NodeId) -> Vector2<f64> {
        self.ring.get(id).p
    }

    #[inline]
    fn area2(&self, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
        self.orient * cross(a, b, c)
    }

    #[inline]
    fn is_left(&self, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
        self.area2(a, b, c) > 0.0
    }

    #[inline]
    fn is_left_on(&self, a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
        self.area2(a, b, c) >= 0.0
    }

    /// Segment `a → b` is a proper internal diagonal.
    fn is_diagonal(&self, a: NodeId, b: NodeId) -> bool {
        self.is_in_cone(a, b) && self.is_in_cone(b, a) && self.is_diagonalie(a, b)
    }

    /// Segment `a → b` starts into the interior angle at `a`.
    fn is_in_cone(&self, a: NodeId, b: NodeId) -> bool {
        let (pa, pb) = (self.pt(a), self.pt(b));
        let a0 = self.pt(self.ring.prev(a));
        let a1 = self.pt(self.ring.next(a));
        if self.is_left_on(pa, a1, a0) {
            // convex vertex
            self.is_left(pa, pb, a0) && self.is_left(pb, pa, a1)
        } else {
            // reflex vertex
            !(self.is_left_on(pa, pb, a1) && self.is_left_on(pb, pa, a0))
        }
    }

    /// No polygon edge other than those touching `a` or `b` meets `a → b`.
    fn is_diagonalie(&self, a: NodeId, b: NodeId) -> bool {
        let (pa, pb) = (self.pt(a), self.pt(b));
        self.ring.iter().all(|c| {
            let c1 = self.ring.next(c);
            if c == a || c1 == a || c == b || c1 == b {
                return true;
            }
            !segments_intersect(pa, pb, self.pt(c), self.pt(c1))
        })
    }
}

/// Closed segments `[a,b]` and `[c,d]` share a point (proper or touching).
fn segments_intersect(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    let abc = cross(a, b, c);
    let abd = cross(a, b, d);
    let cda = cross(c, d, a);
    let cdb = cross(c, d, b);
    if abc != 0.0 && abd != 0.0 && cda != 0.0 && cdb != 0.0 {
        return ((abc > 0.0) != (abd > 0.0)) && ((cda > 0.0) != (cdb > 0.0));
    }
    (abc == 0.0 && between_collinear(a, b, c))
        || (abd == 0.0 && between_collinear(a, b, d))
        || (cda == 0.0 && between_collinear(c, d, a))
        || (cdb == 0.0 && between_collinear(c, d, b))
}

//! Advancing-front intersection of two convex polygons.
//!
//! Two cursors walk the boundaries of A and B. At each step the current edge
//! pair is classified by three orientation tests; crossings are emitted and
//! flip which polygon is known to be inside, and whichever cursor lags behind
//! the other's edge is advanced, emitting its vertex while its polygon is the
//! inside one. Clockwise inputs are walked in reverse index order, so both
//! walks see CCW boundaries and the output is CCW.

use nalgebra::Vector2;

use crate::geom2::predicates::{area_sign, between_collinear, cross};
use crate::geom2::{GeomCfg, Polygon2};

/// Which polygon's advancing vertex is known to lie inside the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InFlag {
    Unknown,
    AInside,
    BInside,
}

/// Outcome of intersecting two closed segments.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SegHit {
    Disjoint,
    /// Interiors cross at one point.
    Proper(Vector2<f64>),
    /// One point, at an endpoint of either segment.
    Vertex(Vector2<f64>),
    /// Collinear overlap from the first point to the second.
    Overlap(Vector2<f64>, Vector2<f64>),
}

/// CCW view over a polygon's vertices, reversing clockwise input.
struct CcwView<'a> {
    v: &'a [Vector2<f64>],
    rev: bool,
}

impl<'a> CcwView<'a> {
    fn new(p: &'a Polygon2) -> Self {
        Self {
            v: &p.vertices,
            rev: !p.is_ccw(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn get(&self, k: usize) -> Vector2<f64> {
        if self.rev {
            self.v[self.v.len() - 1 - k]
        } else {
            self.v[k]
        }
    }
}

/// Convex-convex clipping walk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvexClip {
    pub cfg: GeomCfg,
}

impl ConvexClip {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }

    /// Intersect convex polygons `a` and `b` into `out` (cleared first).
    ///
    /// Returns `true` iff the boundaries were found to cross or to share an
    /// anti-parallel edge overlap (then `out` holds just that segment).
    ///
    /// When one polygon lies entirely inside the other the boundaries never
    /// cross, so this returns `false` with an empty `out`, the same as for
    /// disjoint polygons. Callers must separate the two cases themselves, e.g.
    /// with `Polygon2::contains_convex` on one vertex of each.
    pub fn process(&self, a: &Polygon2, b: &Polygon2, out: &mut Polygon2) -> bool {
        out.clear();
        let pa = CcwView::new(a);
        let pb = CcwView::new(b);
        let (n, m) = (pa.len(), pb.len());
        if n < 3 || m < 3 {
            return false;
        }
        let tol = self.cfg.eps_area;
        let origin = Vector2::zeros();

        let (mut ia, mut ib) = (0usize, 0usize);
        // advance counters
        let (mut aa, mut ba) = (0usize, 0usize);
        let mut inflag = InFlag::Unknown;
        let mut first_point = true;

        loop {
            let a0 = pa.get((ia + n - 1) % n);
            let a1 = pa.get(ia);
            let b0 = pb.get((ib + m - 1) % m);
            let b1 = pb.get(ib);
            let edge_a = a1 - a0;
            let edge_b = b1 - b0;

            let turn = area_sign(origin, edge_a, edge_b, tol);
            // is A's head left of B's edge, and vice versa
            let a_hb = area_sign(b0, b1, a1, tol);
            let b_ha = area_sign(a0, a1, b1, tol);

            match seg_seg(a0, a1, b0, b1) {
                SegHit::Proper(p) | SegHit::Vertex(p) => {
                    if inflag == InFlag::Unknown && first_point {
                        // the output polygon really starts here
                        aa = 0;
                        ba = 0;
                        first_point = false;
                    }
                    emit(out, p);
                    inflag = if a_hb > 0 {
                        InFlag::AInside
                    } else if b_ha > 0 {
                        InFlag::BInside
                    } else {
                        inflag
                    };
                }
                SegHit::Overlap(p, q) if edge_a.dot(&edge_b) < 0.0 => {
                    out.clear();
                    out.push(p);
                    if q != p {
                        out.push(q);
                    }
                    return true;
                }
                _ => {}
            }

            if turn == 0 && a_hb < 0 && b_ha < 0 {
                // parallel edges facing apart: disjoint
                out.clear();
                return false;
            } else if turn == 0 && a_hb == 0 && b_ha == 0 {
                // collinear edges: advance without output
                if inflag == InFlag::AInside {
                    ib = advance(ib, &mut ba, m);
                } else {
                    ia = advance(ia, &mut aa, n);
                }
            } else if turn >= 0 {
                if b_ha > 0 {
                    if inflag == InFlag::AInside {
                        emit(out, a1);
                    }
                    ia = advance(ia, &mut aa, n);
                } else {
                    if inflag == InFlag::BInside {
                        emit(out, b1);
                    }
                    ib = advance(ib, &mut ba, m);
                }
            } else if a_hb > 0 {
                if inflag == InFlag::BInside {
                    emit(out, b1);
                }
                ib = advance(ib, &mut ba, m);
            } else {
                if inflag == InFlag::AInside {
                    emit(out, a1);
                }
                ia = advance(ia, &mut aa, n);
            }

            if !((aa < n || ba < m) && aa < 2 * n && ba < 2 * m) {
                break;
            }
        }

        if out.len() >= 2 && out.vertices.first() == out.vertices.last() {
            out.vertices.pop();
        }
        !first_point
    }
}

#[inline]
fn advance(i: usize, counter: &mut usize, n: usize) -> usize {
    *counter += 1;
    (i + 1) % n
}

/// Append unless it repeats the last emitted point.
#[inline]
fn emit(out: &mut Polygon2, p: Vector2<f64>) {
    if out.vertices.last() != Some(&p) {
        out.push(p);
    }
}

/// Intersection of closed segments `[a,b]` and `[c,d]`.
fn seg_seg(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> SegHit {
    let denom = a.x * (d.y - c.y) + b.x * (c.y - d.y) + d.x * (b.y - a.y) + c.x * (a.y - b.y);
    if denom == 0.0 {
        return parallel_overlap(a, b, c, d);
    }
    let mut at_vertex = false;

    let num = a.x * (d.y - c.y) + c.x * (a.y - d.y) + d.x * (c.y - a.y);
    if num == 0.0 || num == denom {
        at_vertex = true;
    }
    let s = num / denom;

    let num = -(a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y));
    if num == 0.0 || num == denom {
        at_vertex = true;
    }
    let t = num / denom;

    let p = a + (b - a) * s;
    if 0.0 < s && s < 1.0 && 0.0 < t && t < 1.0 {
        SegHit::Proper(p)
    } else if s < 0.0 || s > 1.0 || t < 0.0 || t > 1.0 {
        SegHit::Disjoint
    } else if at_vertex {
        SegHit::Vertex(p)
    } else {
        SegHit::Disjoint
    }
}

fn parallel_overlap(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> SegHit {
    if cross(a, b, c) != 0.0 {
        return SegHit::Disjoint;
    }
    let (ac, ad) = (between_collinear(a, b, c), between_collinear(a, b, d));
    let (ca, cb) = (between_collinear(c, d, a), between_collinear(c, d, b));
    if ac && ad {
        SegHit::Overlap(c, d)
    } else if ca && cb {
        SegHit::Overlap(a, b)
    } else if ac && cb {
        SegHit::Overlap(c, b)
    } else if ac && ca {
        SegHit::Overlap(c, a)
    } else if ad && cb {
        SegHit::Overlap(d, b)
    } else if ad && ca {
        SegHit::Overlap(d, a)
    } else {
        SegHit::Disjoint
    }
}

#[cfg(test)]
mod seg_tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn proper_vertex_and_overlap_hits() {
        let hit = seg_seg(
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![2.0, 0.0],
        );
        assert_eq!(hit, SegHit::Proper(vector![1.0, 1.0]));

        let touch = seg_seg(
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 3.0],
        );
        assert_eq!(touch, SegHit::Vertex(vector![1.0, 0.0]));

        let apart = seg_seg(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, -1.0],
            vector![2.0, 1.0],
        );
        assert_eq!(apart, SegHit::Disjoint);

        let overlap = seg_seg(
            vector![0.0, 0.0],
            vector![3.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 0.0],
        );
        assert_eq!(overlap, SegHit::Overlap(vector![1.0, 0.0], vector![3.0, 0.0]));
    }
}

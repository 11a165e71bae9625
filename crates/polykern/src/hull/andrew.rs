//! Andrew's monotone chain.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom2::predicates::subtract_then_cross;
use crate::geom2::Polygon2;

/// Monotone-chain hull builder with a reusable stack.
///
/// Output is CCW with no collinear triples. Not reentrant: the stack is
/// shared across calls on the same instance.
#[derive(Clone, Debug, Default)]
pub struct AndrewMonotone {
    work: Vec<Vector2<f64>>,
}

impl AndrewMonotone {
    /// Compute the hull of `points` into `hull`.
    ///
    /// `points` is sorted in place (lexicographic by x, then y). Inputs with
    /// two or fewer points are copied through unchanged.
    pub fn process(&mut self, points: &mut [Vector2<f64>], hull: &mut Polygon2) {
        hull.clear();
        if points.len() <= 2 {
            hull.vertices.extend_from_slice(points);
            return;
        }
        points.sort_by(lexicographic);

        let work = &mut self.work;
        work.clear();

        // lower chain, left to right
        for &p in points.iter() {
            while work.len() >= 2
                && subtract_then_cross(work[work.len() - 1], work[work.len() - 2], p) >= 0.0
            {
                work.pop();
            }
            work.push(p);
        }
        // the rightmost point is pushed again by the upper chain
        work.pop();
        let min_size = work.len() + 2;

        // upper chain, right to left; never pops into the lower chain
        for &p in points.iter().rev() {
            while work.len() >= min_size
                && subtract_then_cross(work[work.len() - 1], work[work.len() - 2], p) >= 0.0
            {
                work.pop();
            }
            work.push(p);
        }
        // the leftmost point closes the loop and is already first
        work.pop();

        hull.vertices.extend_from_slice(work);
    }
}

pub(crate) fn lexicographic(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

//! Graham scan, in two flavors.
//!
//! Both pick the lowest-x point (ties: lowest y) as pivot and sort the rest
//! by polar angle around it, closer points first on equal angle.
//! `GrahamScan` then runs the plain popping scan; `GrahamScanCollinear`
//! first collapses every run of points on one ray from the pivot to its
//! farthest member and seeds the stack with three points before scanning.

use std::cmp::Ordering;

use nalgebra::Vector2;

use crate::geom2::predicates::{cross, is_cw};
use crate::geom2::Polygon2;

/// Polar-angle order around a fixed pivot.
///
/// Every other point lies in the half-plane `x >= pivot.x` (and not straight
/// below the pivot), so the slope of `p - pivot` orders the angles. Sorting on
/// this key is a total order even for nearly collinear input, and since
/// division is correctly rounded, points on one exact ray share a slope and
/// fall back to distance.
#[derive(Clone, Copy, Debug)]
struct PolarOrder {
    pivot: Vector2<f64>,
}

impl PolarOrder {
    /// `(slope, squared distance)`; vertical rays get `+inf`, pivot copies `-inf`.
    fn key(&self, p: &Vector2<f64>) -> (f64, f64) {
        let d = p - self.pivot;
        let slope = if d.x > 0.0 {
            // fold -0.0 into +0.0
            d.y / d.x + 0.0
        } else if d.y > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
        (slope, d.norm_squared())
    }

    fn compare(&self, a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
        let (sa, da) = self.key(a);
        let (sb, db) = self.key(b);
        sa.total_cmp(&sb).then_with(|| da.total_cmp(&db))
    }
}

/// Index of the pivot: lowest x, then lowest y.
pub(super) fn pivot_index(points: &[Vector2<f64>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let q = points[best];
        if p.x < q.x || (p.x == q.x && p.y < q.y) {
            best = i;
        }
    }
    best
}

/// Sort `points` around their pivot; the pivot ends up at index 0.
///
/// Panics if the pivot does not sort first, which only happens for NaN
/// coordinates.
fn sort_around_pivot(points: &mut [Vector2<f64>]) -> PolarOrder {
    let pivot = points[pivot_index(points)];
    let order = PolarOrder { pivot };
    points.sort_by(|a, b| order.compare(a, b));
    assert!(
        points[0] == pivot,
        "graham scan: pivot did not sort to the front"
    );
    order
}

/// Graham scan producing a CCW `Polygon2`. Not reentrant.
#[derive(Clone, Debug, Default)]
pub struct GrahamScan {
    stack: Vec<Vector2<f64>>,
}

impl GrahamScan {
    /// Compute the hull of `points` into `hull`; `points` is reordered in place.
    pub fn process(&mut self, points: &mut [Vector2<f64>], hull: &mut Polygon2) {
        hull.clear();
        if points.len() <= 2 {
            hull.vertices.extend_from_slice(points);
            return;
        }
        sort_around_pivot(points);

        let stack = &mut self.stack;
        stack.clear();
        stack.push(points[0]);
        stack.push(points[1]);
        for &p in &points[2..] {
            while stack.len() >= 2 && is_cw(stack[stack.len() - 2], stack[stack.len() - 1], p) >= 0.0
            {
                stack.pop();
            }
            stack.push(p);
        }
        hull.vertices.extend_from_slice(stack);
    }
}

/// Graham scan that collapses collinear runs around the pivot and writes a
/// plain vertex array. Not reentrant.
#[derive(Clone, Debug, Default)]
pub struct GrahamScanCollinear {
    stack: Vec<Vector2<f64>>,
}

impl GrahamScanCollinear {
    /// Compute the hull of `points` into `out` (CCW); `points` is reordered in place.
    pub fn process(&mut self, points: &mut [Vector2<f64>], out: &mut Vec<Vector2<f64>>) {
        out.clear();
        let n = points.len();
        if n <= 2 {
            out.extend_from_slice(points);
            return;
        }
        let order = sort_around_pivot(points);
        let pivot = order.pivot;

        let stack = &mut self.stack;
        stack.clear();
        stack.push(pivot);

        // Skip points coincident with the pivot.
        let mut i = 1;
        while i < n && points[i] == pivot {
            i += 1;
        }
        if i == n {
            out.push(pivot);
            return;
        }
        i = next_not_on_same_line(points, pivot, i);
        stack.push(points[i]);
        i += 1;
        if i == n {
            out.extend_from_slice(stack);
            return;
        }
        i = next_not_on_same_line(points, pivot, i);
        stack.push(points[i]);
        i += 1;

        while i < n {
            i = next_not_on_same_line(points, pivot, i);
            let p = points[i];
            while stack.len() >= 2 && is_cw(stack[stack.len() - 2], stack[stack.len() - 1], p) >= 0.0
            {
                stack.pop();
            }
            stack.push(p);
            i += 1;
        }
        out.extend_from_slice(stack);
    }
}

/// From `start`, advance over the run of sorted points lying on the same ray
/// from `pivot` and return the index of the run's last (farthest) point.
fn next_not_on_same_line(points: &[Vector2<f64>], pivot: Vector2<f64>, start: usize) -> usize {
    let mut i = start;
    while i + 1 < points.len() && cross(pivot, points[i], points[i + 1]) == 0.0 {
        i += 1;
    }
    i
}

//! Orientation and area-sign predicates.
//!
//! All higher components build on these. Everything here is pure and total;
//! NaN inputs compare as collinear (sign 0) and are out of contract anyway.

use nalgebra::Vector2;

/// Twice the signed area of triangle `(a, b, c)`: `(b - a) × (c - a)`.
///
/// Positive for a left (CCW) turn a→b→c.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// 2D cross product of two vectors.
#[inline]
pub fn cross_vec(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

/// `(a - b) × (a - c)`; the turn test used by the monotone chain.
///
/// Equals `-cross(b, a, c)`, i.e. it is `>= 0` exactly when `b → a → c`
/// is not a strict left turn.
#[inline]
pub fn subtract_then_cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let u = a - b;
    let v = a - c;
    u.x * v.y - u.y * v.x
}

/// Sign of `cross(a, b, c)`: `1` left turn, `-1` right turn, `0` collinear.
#[inline]
pub fn orientation_sign(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> i32 {
    let v = cross(a, b, c);
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Positive when `a → b → c` turns clockwise, zero when straight.
#[inline]
pub fn is_cw(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    -cross(a, b, c)
}

/// Sign of `(a - origin) × (b - origin)` with a tolerance band `[-tol, tol]`
/// mapped to `0`.
#[inline]
pub fn area_sign(origin: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, tol: f64) -> i32 {
    let v = cross(origin, a, b);
    if v > tol {
        1
    } else if v < -tol {
        -1
    } else {
        0
    }
}

/// True if `c` lies on the closed segment `[a, b]`, assuming the three are
/// already known to be collinear.
#[inline]
pub fn between_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    if a.x != b.x {
        (a.x <= c.x && c.x <= b.x) || (a.x >= c.x && c.x >= b.x)
    } else {
        (a.y <= c.y && c.y <= b.y) || (a.y >= c.y && c.y >= b.y)
    }
}

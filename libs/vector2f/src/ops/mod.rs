//! Combinator functions over [`Vector2f`].
//!
//! Every function takes its operands by shared reference and returns a fresh
//! value; inputs are never modified. Nothing is validated: division by a zero
//! component or normalizing the zero vector produce `±Infinity`/`NaN`.

use crate::vector::Vector2f;

/// Component-wise sum `a + b`.
///
/// # Examples
/// ```
/// use vector2f::{add2f, Vector2f};
/// let a = Vector2f::new(-2.0, -4.0);
/// assert_eq!(add2f(&a, &Vector2f::new(4.0, 8.0)), Vector2f::new(2.0, 4.0));
/// assert_eq!(a, Vector2f::new(-2.0, -4.0));
/// ```
pub fn add2f(a: &Vector2f, b: &Vector2f) -> Vector2f {
    Vector2f::new(a.x + b.x, a.y + b.y)
}

/// Component-wise difference `a - b`.
pub fn subtract2f(a: &Vector2f, b: &Vector2f) -> Vector2f {
    Vector2f::new(a.x - b.x, a.y - b.y)
}

/// Component-wise product. Not a dot product.
pub fn multiply2f(a: &Vector2f, b: &Vector2f) -> Vector2f {
    Vector2f::new(a.x * b.x, a.y * b.y)
}

/// Component-wise quotient `a / b`.
///
/// # Examples
/// ```
/// use vector2f::{divide2f, Vector2f};
/// let q = divide2f(&Vector2f::new(1.0, 0.0), &Vector2f::zero());
/// assert!(q.x.is_infinite() && q.y.is_nan());
/// ```
pub fn divide2f(a: &Vector2f, b: &Vector2f) -> Vector2f {
    Vector2f::new(a.x / b.x, a.y / b.y)
}

/// Multiplies both components of `a` by `factor`.
pub fn scale2f(a: &Vector2f, factor: f64) -> Vector2f {
    Vector2f::new(a.x * factor, a.y * factor)
}

/// Euclidean length of `a`.
pub fn magnitude(a: &Vector2f) -> f64 {
    (a.x * a.x + a.y * a.y).sqrt()
}

/// Returns `a` scaled by `1 / magnitude(a)`.
///
/// The zero vector scales by `Infinity`, giving `NaN` components.
///
/// # Examples
/// ```
/// use vector2f::{normalize2f, Vector2f};
/// assert_eq!(normalize2f(&Vector2f::new(0.0, -5.0)), Vector2f::new(0.0, -1.0));
/// assert!(normalize2f(&Vector2f::zero()).x.is_nan());
/// ```
pub fn normalize2f(a: &Vector2f) -> Vector2f {
    scale2f(a, 1.0 / magnitude(a))
}

/// Sum of per-axis products, `a.x*b.x + a.y*b.y`.
pub fn dot_product(a: &Vector2f, b: &Vector2f) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Orientation term used by [`angle_between`]: `a.x*b.y + a.y*b.x`.
///
/// This sums the cross terms instead of subtracting them, so it is not the
/// conventional 2D cross product. [`angle_between`] depends on this exact
/// formula for its sign.
///
/// # Examples
/// ```
/// use vector2f::{determinant, Vector2f};
/// let d = determinant(&Vector2f::new(-6.0, 8.0), &Vector2f::new(5.0, 12.0));
/// assert_eq!(d, -32.0);
/// ```
pub fn determinant(a: &Vector2f, b: &Vector2f) -> f64 {
    a.x * b.y + a.y * b.x
}

/// Angle in radians from `a` to `b`, `atan2(determinant, dot_product)`.
///
/// The result lies in `[-π, π]`. Because [`determinant`] sums the cross
/// terms, `angle_between(a, a)` is `0` only when `a` lies on an axis.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use vector2f::{angle_between, Vector2f};
///
/// let up = Vector2f::new(0.0, 1.0);
/// let right = Vector2f::new(1.0, 0.0);
/// assert_eq!(angle_between(&up, &up), 0.0);
/// assert_eq!(angle_between(&up, &right), FRAC_PI_2);
/// ```
pub fn angle_between(a: &Vector2f, b: &Vector2f) -> f64 {
    determinant(a, b).atan2(dot_product(a, b))
}

//! The [`Vector2f`] value type.
//!
//! Each operation exists in two call shapes: a mutating method defined here
//! that writes its result back into the receiver, and a pure combinator in
//! [`crate::ops`] that returns a new vector. The mutating methods are defined
//! in terms of the combinators so both shapes always agree.
//!
//! The combinator form is also reachable through operator overloading
//! (`a + b`, `a * 2.0`, `a += b`), see [`operators`].

use std::fmt;

use crate::ops;

pub mod operators;

/// A point or direction in the plane.
///
/// No invariant constrains the components; `NaN` and infinities are accepted
/// and propagate through every operation.
///
/// # Examples
/// ```
/// use vector2f::Vector2f;
///
/// let mut v = Vector2f::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// v.normalize();
/// assert!(v.equal_to(&Vector2f::new(0.6, 0.8), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2f {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2f {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the zero vector `(0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use vector2f::Vector2f;
    /// assert_eq!(Vector2f::zero(), Vector2f::new(0.0, 0.0));
    /// ```
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a vector from an `[x, y]` array.
    pub const fn from_array(components: [f64; 2]) -> Self {
        Self::new(components[0], components[1])
    }

    /// Returns the components as an `[x, y]` array.
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Replaces both components.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Replaces the x component.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Replaces the y component.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Exact component-wise comparison using IEEE `==`.
    ///
    /// `NaN` never equals anything and `-0.0` equals `0.0`.
    ///
    /// # Examples
    /// ```
    /// use vector2f::Vector2f;
    /// assert!(Vector2f::new(0.0, -0.0).equals(&Vector2f::zero()));
    /// assert!(!Vector2f::new(f64::NAN, 0.0).equals(&Vector2f::new(f64::NAN, 0.0)));
    /// ```
    pub fn equals(&self, other: &Vector2f) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Tolerance comparison: true when each axis differs by at most `epsilon`.
    ///
    /// # Examples
    /// ```
    /// use vector2f::Vector2f;
    /// let a = Vector2f::new(0.001, 0.001);
    /// let b = Vector2f::new(0.002, 0.002);
    /// assert!(a.equal_to(&b, 0.01));
    /// assert!(!a.equal_to(&b, 0.0));
    /// ```
    pub fn equal_to(&self, other: &Vector2f, epsilon: f64) -> bool {
        within_tolerance(self.x, other.x, epsilon) && within_tolerance(self.y, other.y, epsilon)
    }

    /// Adds `other` to this vector component-wise.
    ///
    /// With `std::ops::Add` imported, `a.add(&b)` resolves to the operator
    /// trait and fails to type-check. Call `Vector2f::add(&mut a, &b)` or use
    /// `a += b` in that case.
    ///
    /// # Examples
    /// ```
    /// use std::ops::Add;
    /// use vector2f::Vector2f;
    ///
    /// let mut a = Vector2f::new(1.0, 2.0);
    /// Vector2f::add(&mut a, &Vector2f::new(1.0, 1.0));
    /// assert_eq!(a, Vector2f::new(2.0, 3.0));
    /// assert_eq!(a.add(Vector2f::new(1.0, 1.0)), Vector2f::new(3.0, 4.0));
    /// ```
    pub fn add(&mut self, other: &Vector2f) {
        *self = ops::add2f(self, other);
    }

    /// Subtracts `other` from this vector component-wise.
    pub fn subtract(&mut self, other: &Vector2f) {
        *self = ops::subtract2f(self, other);
    }

    /// Multiplies this vector by `other` component-wise.
    ///
    /// This is not a dot product, see [`ops::dot_product`].
    pub fn multiply(&mut self, other: &Vector2f) {
        *self = ops::multiply2f(self, other);
    }

    /// Divides this vector by `other` component-wise.
    ///
    /// A zero divisor component yields `±Infinity` or `NaN` in that axis.
    pub fn divide(&mut self, other: &Vector2f) {
        *self = ops::divide2f(self, other);
    }

    /// Multiplies both components by `factor`.
    pub fn scale(&mut self, factor: f64) {
        *self = ops::scale2f(self, factor);
    }

    /// Scales this vector to unit magnitude.
    ///
    /// The zero vector has no direction: normalizing it divides by zero and
    /// leaves `NaN` components behind.
    pub fn normalize(&mut self) {
        *self = ops::normalize2f(self);
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    pub fn magnitude(&self) -> f64 {
        ops::magnitude(self)
    }
}

/// `|a - b| <= epsilon`; a NaN anywhere makes it false.
fn within_tolerance(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Vector2f {
    fn from(components: [f64; 2]) -> Self {
        Self::from_array(components)
    }
}

impl From<(f64, f64)> for Vector2f {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2f> for [f64; 2] {
    fn from(v: Vector2f) -> Self {
        v.to_array()
    }
}

impl From<glam::DVec2> for Vector2f {
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2f> for glam::DVec2 {
    fn from(v: Vector2f) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}

//! Operator overloads for [`Vector2f`].
//!
//! Binary operators are the combinator form (both operands untouched, new
//! value returned); compound assignment is the in-place form. All of them
//! are component-wise. `*` with an `f64` scales.
//!
//! ```
//! use vector2f::Vector2f;
//!
//! let a = Vector2f::new(-2.0, -4.0);
//! let b = Vector2f::new(4.0, 8.0);
//! assert_eq!(a * b, Vector2f::new(-8.0, -32.0));
//! assert_eq!(a * 2.0, Vector2f::new(-4.0, -8.0));
//!
//! let mut c = a;
//! c /= b;
//! assert_eq!(c, Vector2f::new(-0.5, -0.5));
//! ```

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use super::Vector2f;
use crate::ops;

impl std::ops::Add for Vector2f {
    type Output = Vector2f;

    fn add(self, rhs: Vector2f) -> Vector2f {
        ops::add2f(&self, &rhs)
    }
}

impl std::ops::Sub for Vector2f {
    type Output = Vector2f;

    fn sub(self, rhs: Vector2f) -> Vector2f {
        ops::subtract2f(&self, &rhs)
    }
}

impl std::ops::Mul for Vector2f {
    type Output = Vector2f;

    fn mul(self, rhs: Vector2f) -> Vector2f {
        ops::multiply2f(&self, &rhs)
    }
}

impl std::ops::Mul<f64> for Vector2f {
    type Output = Vector2f;

    fn mul(self, factor: f64) -> Vector2f {
        ops::scale2f(&self, factor)
    }
}

impl std::ops::Div for Vector2f {
    type Output = Vector2f;

    fn div(self, rhs: Vector2f) -> Vector2f {
        ops::divide2f(&self, &rhs)
    }
}

impl AddAssign for Vector2f {
    fn add_assign(&mut self, rhs: Vector2f) {
        Vector2f::add(self, &rhs);
    }
}

impl SubAssign for Vector2f {
    fn sub_assign(&mut self, rhs: Vector2f) {
        self.subtract(&rhs);
    }
}

impl MulAssign for Vector2f {
    fn mul_assign(&mut self, rhs: Vector2f) {
        self.multiply(&rhs);
    }
}

impl MulAssign<f64> for Vector2f {
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor);
    }
}

impl DivAssign for Vector2f {
    fn div_assign(&mut self, rhs: Vector2f) {
        self.divide(&rhs);
    }
}

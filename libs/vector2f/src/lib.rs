//! Two-dimensional vector arithmetic.
//!
//! This crate provides [`Vector2f`], a copyable `f64` point/direction in the
//! plane, together with its operation set: in-place mutation, pure combinator
//! functions, geometric queries and a reconfigurable basis of named unit
//! vectors (Up/Right/Down/Left).
//!
//! Every arithmetic operation is total. Degenerate inputs such as a zero
//! divisor or normalizing the zero vector yield IEEE-754 `Infinity`/`NaN`
//! components instead of errors.
//!
//! ```
//! use vector2f::{add2f, angle_between, Vector2f};
//!
//! let mut a = Vector2f::new(1.0, 2.0);
//! let b = Vector2f::new(3.0, 4.0);
//!
//! let sum = add2f(&a, &b);
//! a.add(&b);
//! assert_eq!(a, sum);
//!
//! let up = vector2f::units::up();
//! assert_eq!(angle_between(&up, &up), 0.0);
//! ```

pub mod error;
pub mod ops;
pub mod units;
pub mod vector;

pub use error::{UnitsError, UnitsResult};
pub use ops::*;
pub use units::{init_units, units, UnitRegistry, UnitVectors};
pub use vector::Vector2f;

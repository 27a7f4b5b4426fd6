//! # Config Crate
//!
//! Centralized configuration constants for the `vector2f` library.
//! Default unit-vector components, the mirror factors used to derive the
//! Down and Left vectors, and comparison tolerances are defined here so that
//! no literal is scattered across the vector code.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_UP, EQUALITY_EPSILON};
//!
//! assert_eq!(DEFAULT_UP, [0.0, 1.0]);
//! assert!((1.0_f64 - (1.0 + 1e-12)).abs() <= EQUALITY_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Plain `f64` arrays, no vector type required
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

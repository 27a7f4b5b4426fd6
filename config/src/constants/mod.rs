//! Centralized configuration values shared by the vector library.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

// =============================================================================
// UNIT VECTOR DEFAULTS
// =============================================================================

/// Components of the default Up unit vector (positive Y axis).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_UP;
/// assert_eq!(DEFAULT_UP[1], 1.0);
/// ```
pub const DEFAULT_UP: [f64; 2] = [0.0, 1.0];

/// Components of the default Right unit vector (positive X axis).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RIGHT;
/// assert_eq!(DEFAULT_RIGHT[0], 1.0);
/// ```
pub const DEFAULT_RIGHT: [f64; 2] = [1.0, 0.0];

/// Components of the default Down unit vector (negative Y axis).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DOWN;
/// assert_eq!(DEFAULT_DOWN, [0.0, -1.0]);
/// ```
pub const DEFAULT_DOWN: [f64; 2] = [0.0, -1.0];

/// Components of the default Left unit vector (negative X axis).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LEFT;
/// assert_eq!(DEFAULT_LEFT, [-1.0, 0.0]);
/// ```
pub const DEFAULT_LEFT: [f64; 2] = [-1.0, 0.0];

/// Component-wise factor applied to Up to derive Down.
///
/// This mirrors Up across the X axis rather than negating it, so only the
/// Y component changes sign and the X component is zeroed.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_UP, DOWN_MIRROR};
/// let down = [DEFAULT_UP[0] * DOWN_MIRROR[0], DEFAULT_UP[1] * DOWN_MIRROR[1]];
/// assert_eq!(down, [0.0, -1.0]);
/// ```
pub const DOWN_MIRROR: [f64; 2] = [0.0, -1.0];

/// Component-wise factor applied to Right to derive Left.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_RIGHT, LEFT_MIRROR};
/// let left = [DEFAULT_RIGHT[0] * LEFT_MIRROR[0], DEFAULT_RIGHT[1] * LEFT_MIRROR[1]];
/// assert_eq!(left, [-1.0, 0.0]);
/// ```
pub const LEFT_MIRROR: [f64; 2] = [-1.0, 0.0];

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for comparing results of floating-point computations such as
/// normalization or angles.
///
/// # Examples
/// ```
/// use config::constants::EQUALITY_EPSILON;
/// let root = 2.0_f64.sqrt();
/// assert!((root * root - 2.0).abs() <= EQUALITY_EPSILON);
/// ```
pub const EQUALITY_EPSILON: f64 = 1.0e-9;

/// Tolerance that only accepts identical values.
///
/// # Examples
/// ```
/// use config::constants::EXACT_EPSILON;
/// assert!((0.001_f64 - 0.002).abs() > EXACT_EPSILON);
/// ```
pub const EXACT_EPSILON: f64 = 0.0;

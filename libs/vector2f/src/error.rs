//! # Error Types
//!
//! Arithmetic in this crate never fails; degenerate results are carried by
//! IEEE-754 values. The only fallible operation is the call-once unit-vector
//! initialization.

use thiserror::Error;

use crate::vector::Vector2f;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while configuring unit vectors.
///
/// ## Example
///
/// ```rust
/// use vector2f::{UnitRegistry, UnitsError, Vector2f};
///
/// let registry = UnitRegistry::new();
/// registry.init(Vector2f::new(0.0, -1.0), Vector2f::new(1.0, 0.0)).unwrap();
///
/// match registry.init(Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 0.0)) {
///     Err(UnitsError::AlreadyInitialized { up, .. }) => assert_eq!(up.y, -1.0),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum UnitsError {
    /// The one-time initialization already ran.
    ///
    /// Carries the Up and Right vectors that are currently active.
    #[error("unit vectors already initialized (up = {up}, right = {right})")]
    AlreadyInitialized {
        /// Active Up vector.
        up: Vector2f,
        /// Active Right vector.
        right: Vector2f,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for unit-vector configuration.
pub type UnitsResult<T> = Result<T, UnitsError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = UnitsError::AlreadyInitialized {
            up: Vector2f::new(0.0, -1.0),
            right: Vector2f::new(1.0, 0.0),
        };
        let message = err.to_string();
        assert!(message.contains("already initialized"));
        assert!(message.contains("(0, -1)"));
        assert!(message.contains("(1, 0)"));
    }

    /// Test error types are Send + Sync so they can cross thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitsError>();
    }
}

//! Named unit vectors (Up/Right/Down/Left).
//!
//! [`UnitVectors`] is a plain value that can be passed to code needing
//! axis-relative reasoning. [`UnitRegistry`] holds a reconfigurable
//! [`UnitVectors`] behind a lock; the process-wide registry backs the free
//! functions [`units`], [`init_units`], [`up`], [`right`], [`down`],
//! [`left`] and [`current`].
//!
//! Configure once at startup, before any reader relies on the named vectors:
//!
//! ```
//! use vector2f::{units, Vector2f};
//!
//! // Y-down screen space
//! units::units(Vector2f::new(0.0, -1.0), Vector2f::new(1.0, 0.0));
//! assert_eq!(units::down(), Vector2f::new(0.0, 1.0));
//! ```

use std::sync::{PoisonError, RwLock};

use config::constants::{
    DEFAULT_DOWN, DEFAULT_LEFT, DEFAULT_RIGHT, DEFAULT_UP, DOWN_MIRROR, LEFT_MIRROR,
};

use crate::error::{UnitsError, UnitsResult};
use crate::ops::multiply2f;
use crate::vector::Vector2f;

/// A basis of four named reference vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVectors {
    /// Up direction.
    pub up: Vector2f,
    /// Right direction.
    pub right: Vector2f,
    /// Up mirrored across the X axis.
    pub down: Vector2f,
    /// Right mirrored across the Y axis.
    pub left: Vector2f,
}

impl UnitVectors {
    /// Canonical axis-aligned basis: up `(0,1)`, right `(1,0)`, down `(0,-1)`,
    /// left `(-1,0)`.
    pub const STANDARD: UnitVectors = UnitVectors {
        up: Vector2f::from_array(DEFAULT_UP),
        right: Vector2f::from_array(DEFAULT_RIGHT),
        down: Vector2f::from_array(DEFAULT_DOWN),
        left: Vector2f::from_array(DEFAULT_LEFT),
    };

    /// Builds a basis from Up and Right.
    ///
    /// Down is `up * (0, -1)` and Left is `right * (-1, 0)`, both
    /// component-wise. For axis-aligned unit inputs this equals negation; for
    /// anything else it mirrors per axis rather than rotating by 180°.
    ///
    /// # Examples
    /// ```
    /// use vector2f::{UnitVectors, Vector2f};
    ///
    /// let basis = UnitVectors::new(Vector2f::new(1.0, 1.0), Vector2f::new(1.0, 0.0));
    /// assert_eq!(basis.down, Vector2f::new(0.0, -1.0));
    /// ```
    pub fn new(up: Vector2f, right: Vector2f) -> Self {
        Self {
            up,
            right,
            down: multiply2f(&up, &Vector2f::from_array(DOWN_MIRROR)),
            left: multiply2f(&right, &Vector2f::from_array(LEFT_MIRROR)),
        }
    }

    /// Y-down basis commonly used for screen coordinates.
    pub fn screen_space() -> Self {
        Self::new(Vector2f::new(0.0, -1.0), Vector2f::new(1.0, 0.0))
    }
}

impl Default for UnitVectors {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Reconfigurable holder of a [`UnitVectors`] basis.
///
/// Reads and writes go through an [`RwLock`], so concurrent access is safe;
/// readers still observe whichever configuration was current at the time of
/// the read. The one-time init flag lives under the same lock, so a rejected
/// [`UnitRegistry::init`] always reports the basis its winner wrote.
#[derive(Debug)]
pub struct UnitRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Clone, Copy)]
struct RegistryState {
    basis: UnitVectors,
    initialized: bool,
}

impl UnitRegistry {
    /// Creates a registry holding [`UnitVectors::STANDARD`].
    pub const fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                basis: UnitVectors::STANDARD,
                initialized: false,
            }),
        }
    }

    fn read(&self) -> RegistryState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the active basis.
    pub fn current(&self) -> UnitVectors {
        self.read().basis
    }

    /// Replaces Up and Right and rederives Down and Left.
    ///
    /// May be called any number of times.
    pub fn configure(&self, up: Vector2f, right: Vector2f) {
        let basis = UnitVectors::new(up, right);
        self.state.write().unwrap_or_else(PoisonError::into_inner).basis = basis;
        log_configured(&basis);
    }

    /// One-time initialization.
    ///
    /// The first call behaves like [`UnitRegistry::configure`]. Later calls
    /// leave the basis untouched and report the one that is active.
    ///
    /// # Examples
    /// ```
    /// use vector2f::{UnitRegistry, Vector2f};
    ///
    /// let registry = UnitRegistry::new();
    /// assert!(registry.init(Vector2f::new(0.0, -1.0), Vector2f::new(1.0, 0.0)).is_ok());
    /// assert!(registry.init(Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 0.0)).is_err());
    /// assert_eq!(registry.current().up, Vector2f::new(0.0, -1.0));
    /// ```
    pub fn init(&self, up: Vector2f, right: Vector2f) -> UnitsResult<()> {
        let outcome = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if state.initialized {
                Err(state.basis)
            } else {
                state.initialized = true;
                state.basis = UnitVectors::new(up, right);
                Ok(state.basis)
            }
        };

        match outcome {
            Ok(basis) => {
                log_configured(&basis);
                Ok(())
            }
            Err(active) => {
                tracing::warn!(
                    up = %active.up,
                    right = %active.right,
                    "unit vectors already initialized, ignoring reconfiguration"
                );
                Err(UnitsError::AlreadyInitialized {
                    up: active.up,
                    right: active.right,
                })
            }
        }
    }

    /// Whether [`UnitRegistry::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.read().initialized
    }
}

fn log_configured(basis: &UnitVectors) {
    tracing::debug!(
        up = %basis.up,
        right = %basis.right,
        down = %basis.down,
        left = %basis.left,
        "unit vectors configured"
    );
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: UnitRegistry = UnitRegistry::new();

/// The process-wide registry.
pub fn global() -> &'static UnitRegistry {
    &GLOBAL
}

/// Reconfigures the process-wide unit vectors.
///
/// Sets Up and Right, then rederives Down and Left (see [`UnitVectors::new`]).
/// Affects every later read of the named vectors anywhere in the process.
pub fn units(up: Vector2f, right: Vector2f) {
    GLOBAL.configure(up, right);
}

/// Call-once initialization of the process-wide unit vectors.
///
/// Returns [`UnitsError::AlreadyInitialized`] on any call after the first.
pub fn init_units(up: Vector2f, right: Vector2f) -> UnitsResult<()> {
    GLOBAL.init(up, right)
}

/// Snapshot of the process-wide basis.
pub fn current() -> UnitVectors {
    GLOBAL.current()
}

/// Process-wide Up vector.
pub fn up() -> Vector2f {
    current().up
}

/// Process-wide Right vector.
pub fn right() -> Vector2f {
    current().right
}

/// Process-wide Down vector.
pub fn down() -> Vector2f {
    current().down
}

/// Process-wide Left vector.
pub fn left() -> Vector2f {
    current().left
}

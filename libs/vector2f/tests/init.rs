use vector2f::{init_units, units, UnitVectors, UnitsError, Vector2f};

// Separate test binary: the process-wide one-time initialization can only be
// observed once per process.
#[test]
fn init_units_is_call_once() {
    assert!(!units::global().is_initialized());

    init_units(Vector2f::new(0.0, -1.0), Vector2f::new(1.0, 0.0)).unwrap();
    assert_eq!(units::current(), UnitVectors::screen_space());

    let err = init_units(Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 0.0)).unwrap_err();
    assert!(matches!(err, UnitsError::AlreadyInitialized { up, .. } if up == Vector2f::new(0.0, -1.0)));
    assert_eq!(units::down(), Vector2f::new(0.0, 1.0));

    // plain reconfiguration stays available
    units::units(Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 0.0));
    assert_eq!(units::current(), UnitVectors::STANDARD);
}

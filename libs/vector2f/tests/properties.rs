use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use vector2f::{
    add2f, angle_between, determinant, divide2f, dot_product, magnitude, multiply2f,
    normalize2f, scale2f, subtract2f, units, Vector2f,
};

const TOLERANCE: f64 = 1e-9;

fn samples() -> Vec<Vector2f> {
    vec![
        Vector2f::zero(),
        Vector2f::new(1.0, 2.0),
        Vector2f::new(-2.0, -4.0),
        Vector2f::new(0.1, -7.25),
        Vector2f::new(1e6, 3e-4),
    ]
}

#[test]
fn combinators_agree_with_mutating_forms() {
    for a in samples() {
        for b in samples() {
            let (a0, b0) = (a, b);

            let mut m = a;
            m.add(&b);
            assert_eq!(m, add2f(&a0, &b0));

            let mut m = a;
            m.subtract(&b);
            assert_eq!(m, subtract2f(&a0, &b0));

            let mut m = a;
            m.multiply(&b);
            assert_eq!(m, multiply2f(&a0, &b0));

            let mut m = a;
            m.scale(b.x);
            assert_eq!(m, scale2f(&a0, b0.x));

            // operands survive every combinator
            assert_eq!((a, b), (a0, b0));
        }
    }
}

#[test]
fn divide_and_normalize_agree_bitwise() {
    for a in samples() {
        for b in samples() {
            let mut m = a;
            m.divide(&b);
            let c = divide2f(&a, &b);
            assert_eq!(m.x.to_bits(), c.x.to_bits());
            assert_eq!(m.y.to_bits(), c.y.to_bits());
        }

        let mut n = a;
        n.normalize();
        let c = normalize2f(&a);
        assert_eq!(n.x.to_bits(), c.x.to_bits());
        assert_eq!(n.y.to_bits(), c.y.to_bits());
    }
}

#[test]
fn identities_hold_exactly() {
    for a in samples() {
        assert_eq!(add2f(&a, &Vector2f::zero()), a);
        assert_eq!(multiply2f(&a, &Vector2f::new(1.0, 1.0)), a);
    }
}

#[test]
fn subtract_inverts_add() {
    let a = Vector2f::new(0.1, -7.25);
    let b = Vector2f::new(0.2, 3.3);
    assert!(subtract2f(&add2f(&a, &b), &b).equal_to(&a, TOLERANCE));
}

#[test]
fn magnitude_and_normalize() {
    assert_eq!(magnitude(&Vector2f::new(0.0, 0.0)), 0.0);
    assert_eq!(magnitude(&Vector2f::new(3.0, 4.0)), 5.0);

    let n = normalize2f(&Vector2f::new(2.0, 2.0));
    let expected = 1.0 / 2f64.sqrt();
    assert!(n.equal_to(&Vector2f::new(expected, expected), TOLERANCE));

    let degenerate = normalize2f(&Vector2f::zero());
    assert!(!degenerate.x.is_finite());
    assert!(!degenerate.y.is_finite());
}

#[test]
fn dot_product_and_determinant() {
    let a = Vector2f::new(-6.0, 8.0);
    let b = Vector2f::new(5.0, 12.0);
    assert_eq!(dot_product(&a, &b), 66.0);
    assert_eq!(determinant(&a, &b), -32.0);
}

#[test]
fn equal_to_tolerance() {
    let a = Vector2f::new(0.001, 0.001);
    let b = Vector2f::new(0.002, 0.002);
    assert!(a.equal_to(&b, 0.01));
    assert!(!a.equal_to(&b, 0.0));
}

#[test]
fn default_units_and_angles() {
    // only this test touches process-wide state in this binary
    units::units(Vector2f::new(0.0, 1.0), Vector2f::new(1.0, 0.0));

    assert_eq!(units::up(), Vector2f::new(0.0, 1.0));
    assert_eq!(units::right(), Vector2f::new(1.0, 0.0));
    assert_eq!(units::down(), Vector2f::new(0.0, -1.0));
    assert_eq!(units::left(), Vector2f::new(-1.0, 0.0));

    let up = units::up();
    assert_abs_diff_eq!(angle_between(&up, &up), 0.0, epsilon = TOLERANCE);
    assert_abs_diff_eq!(angle_between(&up, &units::right()), FRAC_PI_2, epsilon = TOLERANCE);
    assert_abs_diff_eq!(angle_between(&up, &units::down()), PI, epsilon = TOLERANCE);
    assert_abs_diff_eq!(angle_between(&up, &units::left()), -FRAC_PI_2, epsilon = TOLERANCE);
}

#[test]
fn operators_mirror_combinators() {
    let a = Vector2f::new(-2.0, -4.0);
    let b = Vector2f::new(4.0, 8.0);
    assert_eq!(a + b, add2f(&a, &b));
    assert_eq!(a - b, subtract2f(&a, &b));
    assert_eq!(a * b, multiply2f(&a, &b));
    assert_eq!(a / b, divide2f(&a, &b));
    assert_eq!(a * 0.5, scale2f(&a, 0.5));
}

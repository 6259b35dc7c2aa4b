use super::*;
use proptest::prelude::*;

#[test]
fn test_exact_vectors() {
    assert!(vec2_is_equal(&[0.0, 0.0], &[0.0, 0.0]));
    assert!(!vec2_is_equal(&[0.0, 0.0], &[0.0, 1.0]));
    assert!(vec3_is_equal(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]));
    assert!(!vec4_is_equal(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.5]));
}

#[test]
fn test_exact_rejects_nearly_equal() {
    assert!(!vec2_is_equal(&[0.1, 0.0], &[0.1 + 1e-7, 0.0]));
}

#[test]
fn test_exact_nan_is_never_equal() {
    assert!(!vec2_is_equal(&[f32::NAN, 0.0], &[f32::NAN, 0.0]));
}

#[test]
fn test_exact_is_generic_over_element_type() {
    assert!(vec_is_equal(&[1_i32, 2, 3], &[1, 2, 3]));
    assert!(vec_is_equal(&["a", "b"], &["a", "b"]));
}

#[test]
fn test_tolerant_vectors() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert!(a.approx_eq(&Vec3::new(1.0 + 5e-7, 2.0, 3.0 - 5e-7)));
    assert!(!a.approx_eq(&Vec3::new(1.0, 2.0 + 2e-6, 3.0)));
    assert!(Vec2::new(0.5, 0.5).approx_eq(&Vec2::new(0.5, 0.500_000_1)));
}

#[test]
fn test_tolerant_color_checks_alpha() {
    let opaque = Color::new(1.0, 0.0, 0.0, 1.0);
    let clear = Color::new(1.0, 0.0, 0.0, 0.0);
    assert!(opaque.approx_eq(&opaque));
    assert!(!opaque.approx_eq(&clear));
}

proptest! {
    #[test]
    fn prop_exact_is_reflexive(v in prop::array::uniform4(-1.0e6_f32..1.0e6)) {
        prop_assert!(vec4_is_equal(&v, &v));
    }

    #[test]
    fn prop_tolerant_accepts_sub_epsilon_nudge(
        x in -1.0e3_f64..1.0e3,
        y in -1.0e3_f64..1.0e3,
        nudge in -1.0e-7_f64..1.0e-7,
    ) {
        prop_assert!(Vec2::new(x, y).approx_eq(&Vec2::new(x + nudge, y - nudge)));
    }
}

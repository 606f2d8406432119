//! Integration tests for orogen-math.

use orogen_math::geometry::{face_normal, unit_midpoint};
use orogen_math::Vec3;

#[test]
fn face_normal_is_ccw_up() {
    // CCW triangle in the XZ plane, viewed from +Y.
    let n = face_normal(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
    );
    assert!(n.y > 0.0);
    assert!(n.x.abs() < 1e-6);
    assert!(n.z.abs() < 1e-6);
}

#[test]
fn face_normal_magnitude_is_twice_area() {
    // Right triangle with legs 2 and 3: area 3, cross magnitude 6.
    let n = face_normal(
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
    );
    assert!((n.length() - 6.0).abs() < 1e-5);
}

#[test]
fn unit_midpoint_stays_on_sphere() {
    let a = Vec3::new(0.0, 0.0, -1.0);
    let b = Vec3::new(0.0, 0.942809, 0.333333);
    let m = unit_midpoint(a, b);
    assert!((m.length() - 1.0).abs() < 1e-6);
}

#[test]
fn unit_midpoint_bisects() {
    let a = Vec3::X;
    let b = Vec3::Y;
    let m = unit_midpoint(a, b);
    assert!((m.dot(a) - m.dot(b)).abs() < 1e-6);
}

// Host-side tests for camera math and the product spin.

use glam::{Vec3, Vec4};
use maison_core::{Camera, ProductSpin, AUTOPLAY_INTERVAL_MS, SCROLL_NAV_THRESHOLD};

#[test]
fn camera_looks_down_negative_z_from_the_front() {
    let cam = Camera::product_viewer(16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    // The origin must project inside clip space, in front of the camera.
    let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn spin_angle_wraps_at_tau() {
    let mut spin = ProductSpin::default();
    for _ in 0..100_000 {
        spin.advance(1.0 / 60.0);
        assert!(spin.angle >= 0.0 && spin.angle < std::f32::consts::TAU);
    }
}

#[test]
fn spin_rotates_a_point_around_y() {
    let mut spin = ProductSpin::default();
    spin.advance(1.0);
    let p = spin.primary_model() * Vec4::new(1.0, 0.0, 0.0, 1.0);
    // Rotation about y keeps height and radius.
    assert!(p.y.abs() < 1e-5);
    assert!(((p.x * p.x + p.z * p.z).sqrt() - 1.0).abs() < 1e-4);
    assert!((p.x - 0.6f32.cos()).abs() < 1e-4);
}

#[test]
fn tuning_constants_are_sane() {
    assert!(SCROLL_NAV_THRESHOLD > 0.0);
    assert!(AUTOPLAY_INTERVAL_MS > 0);
}

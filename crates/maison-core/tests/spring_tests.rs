// Host-side tests for the cursor spring.

use glam::Vec2;
use maison_core::spring::CursorSpring;

#[test]
fn first_target_snaps_without_gliding() {
    let mut spring = CursorSpring::new();
    let pos = spring.step(Vec2::new(400.0, 300.0), 1.0 / 60.0);
    assert_eq!(pos, Vec2::new(400.0, 300.0));
}

#[test]
fn converges_to_a_held_target() {
    let mut spring = CursorSpring::new();
    spring.step(Vec2::ZERO, 1.0 / 60.0);
    let target = Vec2::new(500.0, -200.0);
    for _ in 0..120 {
        spring.step(target, 1.0 / 60.0);
    }
    // Two seconds is far past the slow time constant; the ring has settled.
    assert!((spring.position - target).length() < 0.5);
}

#[test]
fn overdamped_approach_does_not_oscillate() {
    let mut spring = CursorSpring::new();
    spring.step(Vec2::ZERO, 1.0 / 60.0);
    let target = Vec2::new(100.0, 0.0);
    let mut prev = (spring.position - target).length();
    for _ in 0..120 {
        let d = (spring.step(target, 1.0 / 60.0) - target).length();
        assert!(d <= prev + 1e-3, "distance grew from {prev} to {d}");
        prev = d;
    }
}

#[test]
fn stationary_at_target_stays_put() {
    let mut spring = CursorSpring::new();
    let target = Vec2::new(10.0, 10.0);
    spring.step(target, 1.0 / 60.0);
    for _ in 0..10 {
        assert_eq!(spring.step(target, 1.0 / 60.0), target);
    }
}

#[test]
fn oversized_dt_is_clamped_and_stays_finite() {
    // A background tab can hand the loop a multi-second dt.
    let mut spring = CursorSpring::new();
    spring.step(Vec2::ZERO, 1.0 / 60.0);
    let pos = spring.step(Vec2::new(300.0, 300.0), 5.0);
    assert!(pos.is_finite());
}

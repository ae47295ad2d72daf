use bubble_core::*;
use glam::Vec2;

fn run(spring: &mut Spring, seconds: f32, dt: f32) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        spring.step(dt);
    }
}

#[test]
fn spring_at_rest_stays_put() {
    let mut s = Spring::new(5.0, 0.6);
    run(&mut s, 1.0, 1.0 / 60.0);
    assert_eq!(s.value(), 5.0);
    assert!(s.is_settled(1e-6));
}

#[test]
fn spring_converges_to_target() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(100.0);
    run(&mut s, 4.0, 1.0 / 60.0);
    assert!((s.value() - 100.0).abs() < 1e-3, "value={}", s.value());
    assert!(s.is_settled(SETTLE_EPSILON));
}

#[test]
fn spring_is_mostly_there_after_one_smooth_time() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(100.0);
    run(&mut s, 0.6, 1.0 / 120.0);
    assert!(s.value() > 85.0 && s.value() < 100.0, "value={}", s.value());
}

#[test]
fn spring_never_overshoots_from_rest() {
    let mut s = Spring::new(0.0, 0.8);
    s.set_target(-250.0);
    for _ in 0..600 {
        s.step(1.0 / 60.0);
        assert!(s.value() >= -250.0 - 1e-3, "overshoot: {}", s.value());
    }
}

#[test]
fn step_size_does_not_change_the_trajectory_much() {
    let mut fine = Spring::new(0.0, 0.6);
    let mut coarse = Spring::new(0.0, 0.6);
    fine.set_target(100.0);
    coarse.set_target(100.0);
    run(&mut fine, 0.5, 1.0 / 240.0);
    run(&mut coarse, 0.5, 0.1);
    assert!((fine.value() - coarse.value()).abs() < 0.5);
}

#[test]
fn huge_step_is_stable() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(10.0);
    s.step(100.0);
    assert!(s.value().is_finite());
    assert!((s.value() - 10.0).abs() < 1e-3);
}

#[test]
fn invalid_dt_is_ignored() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(10.0);
    s.step(0.0);
    s.step(-1.0);
    s.step(f32::NAN);
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn retargeting_keeps_position_and_velocity_continuous() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(100.0);
    run(&mut s, 0.2, 1.0 / 60.0);
    let value = s.value();
    let velocity = s.velocity();
    assert!(velocity > 0.0);

    s.set_target(-100.0);
    assert_eq!(s.value(), value);
    assert_eq!(s.velocity(), velocity);

    // still moving forward for a moment before turning around
    s.step(1.0 / 240.0);
    assert!(s.value() > value);
    run(&mut s, 5.0, 1.0 / 60.0);
    assert!((s.value() + 100.0).abs() < 1e-3);
}

#[test]
fn snap_stops_motion() {
    let mut s = Spring::new(0.0, 0.6);
    s.set_target(100.0);
    s.step(0.1);
    s.snap_to(42.0);
    assert_eq!(s.value(), 42.0);
    assert_eq!(s.target(), 42.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn spring2_moves_axes_independently() {
    let mut s = Spring2::new(Vec2::ZERO, 0.6);
    s.set_target(Vec2::new(100.0, 0.0));
    for _ in 0..30 {
        s.step(1.0 / 60.0);
    }
    assert!(s.value().x > 0.0);
    assert_eq!(s.value().y, 0.0);
    assert_eq!(s.target(), Vec2::new(100.0, 0.0));
}

#[test]
fn longer_smooth_time_is_slower() {
    let mut fast = Spring::new(0.0, CAMERA_SMOOTH_TIME_SEC);
    let mut slow = Spring::new(0.0, PARALLAX_SMOOTH_TIME_SEC);
    fast.set_target(1.0);
    slow.set_target(1.0);
    run(&mut fast, 0.3, 1.0 / 60.0);
    run(&mut slow, 0.3, 1.0 / 60.0);
    assert!(fast.value() > slow.value());
}

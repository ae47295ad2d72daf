//! Critically damped easing toward a target that may move at any time.
//!
//! Each step uses the closed-form solution of a critically damped spring, so
//! the result is stable for any `dt` and retargeting mid-flight keeps both
//! position and velocity continuous. Hosts drive it with their own frame
//! delta; nothing here knows about animation frames.

use glam::Vec2;

// (1 + k) * e^-k ≈ 0.1: after one smooth time about 10% of a jump remains
const SMOOTH_TIME_OMEGA_FACTOR: f32 = 3.9;
const MIN_SMOOTH_TIME_SEC: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    smooth_time: f32,
}

impl Spring {
    pub fn new(value: f32, smooth_time: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            smooth_time: smooth_time.max(MIN_SMOOTH_TIME_SEC),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn smooth_time(&self) -> f32 {
        self.smooth_time
    }

    /// Steer toward a new target without touching the current motion.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        let omega = SMOOTH_TIME_OMEGA_FACTOR / self.smooth_time;
        let x = self.value - self.target;
        let decay = (-omega * dt).exp();
        let temp = (self.velocity + omega * x) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        self.value = self.target + (x + temp) * decay;
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() <= epsilon && self.velocity.abs() <= epsilon
    }
}

/// Two independent springs sharing one smooth time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(value: Vec2, smooth_time: f32) -> Self {
        Self {
            x: Spring::new(value.x, smooth_time),
            y: Spring::new(value.y, smooth_time),
        }
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity(), self.y.velocity())
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.x.snap_to(value.x);
        self.y.snap_to(value.y);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.x.is_settled(epsilon) && self.y.is_settled(epsilon)
    }
}

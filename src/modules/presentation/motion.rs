use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// Linear map of `value` from `input` onto `output`, clamped to the output
/// range at both ends.
pub fn transform(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in_start, in_end] = input;
    let [out_start, out_end] = output;

    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }

    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub value: f64,
    pub velocity: f64,
}

impl MotionState {
    pub fn at_rest(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }
}

/// Interpolation strategy that moves a value toward its target.
pub trait Smoothing: Debug + Send + Sync {
    fn step(&self, state: MotionState, target: f64, dt: Duration) -> MotionState;
}

/// Damped spring. The defaults are the site's parallax constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSmoothing {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringSmoothing {
    fn default() -> Self {
        Self {
            stiffness: 60.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringSmoothing {
    /// Largest integration step; longer frames are subdivided.
    const MAX_STEP: f64 = 1.0 / 120.0;

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Smoothing for SpringSmoothing {
    fn step(&self, state: MotionState, target: f64, dt: Duration) -> MotionState {
        let mut remaining = dt.as_secs_f64();
        let MotionState {
            mut value,
            mut velocity,
        } = state;

        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let force = -self.stiffness * (value - target) - self.damping * velocity;
            velocity += force / self.mass * h;
            value += velocity * h;
            remaining -= h;
        }

        if (value - target).abs() < self.rest_delta && velocity.abs() < self.rest_speed {
            return MotionState::at_rest(target);
        }

        MotionState { value, velocity }
    }
}

/// Jumps straight to the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Smoothing for Immediate {
    fn step(&self, _state: MotionState, target: f64, _dt: Duration) -> MotionState {
        MotionState::at_rest(target)
    }
}

/// A value chasing a target through a [`Smoothing`] strategy.
#[derive(Debug, Clone)]
pub struct SmoothedValue {
    state: MotionState,
    target: f64,
    smoothing: Arc<dyn Smoothing>,
}

impl SmoothedValue {
    /// Starts at rest on `initial`.
    pub fn new(initial: f64, smoothing: Arc<dyn Smoothing>) -> Self {
        Self {
            state: MotionState::at_rest(initial),
            target: initial,
            smoothing,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.state = self.smoothing.step(self.state, self.target, dt);
        self.state.value
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.state == MotionState::at_rest(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn transform_maps_and_clamps() {
        assert_eq!(transform(0.5, [0.0, 1.0], [0.0, 100.0]), 50.0);
        assert_eq!(transform(-1.0, [0.0, 1.0], [0.0, 100.0]), 0.0);
        assert_eq!(transform(2.0, [0.0, 1.0], [0.0, 100.0]), 100.0);
        assert_eq!(transform(0.5, [0.1, 0.9], [30.0, -30.0]), 0.0);
        assert_eq!(transform(0.05, [0.1, 0.9], [30.0, -30.0]), 30.0);
    }

    #[test]
    fn transform_with_empty_input_range_steps() {
        assert_eq!(transform(0.2, [0.5, 0.5], [1.0, 2.0]), 1.0);
        assert_eq!(transform(0.5, [0.5, 0.5], [1.0, 2.0]), 2.0);
    }

    #[test]
    fn default_spring_is_overdamped() {
        assert!(SpringSmoothing::default().damping_ratio() > 1.0);
    }

    #[test]
    fn spring_approaches_target_without_overshoot_and_settles() {
        let mut v = SmoothedValue::new(0.0, Arc::new(SpringSmoothing::default()));
        v.set_target(100.0);

        let mut previous = v.value();
        for _ in 0..600 {
            let now = v.tick(FRAME);
            assert!(now >= previous, "moved backwards: {previous} -> {now}");
            assert!(now <= 100.0, "overshot: {now}");
            previous = now;
        }

        assert!(v.is_at_rest());
        assert_eq!(v.value(), 100.0);
    }

    #[test]
    fn spring_moves_partway_in_one_frame() {
        let mut v = SmoothedValue::new(0.0, Arc::new(SpringSmoothing::default()));
        v.set_target(100.0);

        let after = v.tick(FRAME);
        assert!(after > 0.0 && after < 100.0);
        assert!(!v.is_at_rest());
    }

    #[test]
    fn long_frame_is_subdivided_and_stays_stable() {
        let spring = SpringSmoothing::default();
        let state = spring.step(MotionState::at_rest(0.0), 1.0, Duration::from_secs(10));
        assert_eq!(state, MotionState::at_rest(1.0));
    }

    #[test]
    fn immediate_jumps_to_target() {
        let mut v = SmoothedValue::new(1.0, Arc::new(Immediate));
        v.set_target(1.15);
        assert_eq!(v.tick(FRAME), 1.15);
        assert!(v.is_at_rest());
    }
}

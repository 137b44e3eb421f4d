//! Closed-form timed animation toward a fixed target.

use crate::easing::Easing;

/// A duration-bounded animation evaluating
/// `start + (target - start) * easing(elapsed / duration)`.
///
/// Time is advanced explicitly with frame deltas rather than read from a
/// clock, so the same animation replays identically under a test harness.
#[derive(Debug, Clone)]
pub struct TimedAnimation {
    start_value: f32,
    target: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
}

impl TimedAnimation {
    /// A zero-duration animation completes on its first advance.
    pub fn new(start_value: f32, target: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            start_value,
            target,
            duration_ms: duration_ms.max(0.0),
            easing,
            elapsed_ms: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance by `dt_ms` and return the new value. Past the duration the
    /// value is pinned to the target exactly.
    pub fn advance(&mut self, dt_ms: f32) -> f32 {
        self.elapsed_ms += dt_ms.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.target;
        }
        let fraction = self.elapsed_ms / self.duration_ms;
        self.start_value + (self.target - self.start_value) * self.easing.transform(fraction)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

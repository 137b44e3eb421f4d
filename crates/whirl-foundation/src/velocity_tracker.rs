//! Time-windowed velocity estimation for drag release.
//!
//! Keeps a short trailing history of `(position, time)` samples and
//! estimates velocity over the whole retained window, which smooths out
//! single-sample jitter at the cost of a latency equal to the window size.

use crate::gesture_constants::VELOCITY_WINDOW_MS;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: f32,
    time_ms: i64,
}

/// Sliding-window linear velocity tracker.
///
/// Velocity is `(last.position - first.position) / (last.time - first.time)`
/// in px/ms over the samples retained inside the window. Fewer than two
/// samples, or a zero elapsed time, estimate to zero rather than failing.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 16]>,
    window_ms: i64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::with_window(VELOCITY_WINDOW_MS)
    }

    pub fn with_window(window_ms: i64) -> Self {
        Self {
            samples: SmallVec::new(),
            window_ms: window_ms.max(1),
        }
    }

    /// Append a track-position sample and evict everything older than the
    /// window relative to this newest timestamp.
    ///
    /// Samples are assumed time-ordered; an out-of-order timestamp first
    /// drops the newer history so the order invariant holds.
    pub fn record(&mut self, position: f32, time_ms: i64) {
        self.samples.retain(|sample| sample.time_ms <= time_ms);
        self.samples.push(Sample { position, time_ms });
        let horizon = time_ms - self.window_ms;
        self.samples.retain(|sample| sample.time_ms >= horizon);
    }

    /// Estimate the current velocity in px/ms.
    pub fn estimate(&self) -> f32 {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        let elapsed = (last.time_ms - first.time_ms) as f32;
        if elapsed <= 0.0 {
            return 0.0;
        }
        (last.position - first.position) / elapsed
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

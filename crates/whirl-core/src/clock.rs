//! Frame timing for the motion engine.
//!
//! The host drives animation by calling the widget's tick function once per
//! display frame with the current timestamp. The tick function answers with
//! a [`TickResult`] so the host knows whether another frame is wanted; the
//! core never re-schedules itself. This inversion keeps the physics fully
//! deterministic under a manual test clock.

use web_time::Instant;

/// Upper bound on the frame delta fed into the physics step, in
/// milliseconds.
///
/// A stalled frame (tab in background, debugger pause) would otherwise
/// produce one huge integration step that teleports the track.
pub const MAX_FRAME_DELTA_MS: f32 = 60.0;

/// Continuation signal returned by a per-frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Motion is still live; the host should schedule another frame.
    Continue,
    /// The engine is idle; no further frames are needed until new input.
    Halt,
}

impl TickResult {
    pub fn is_live(self) -> bool {
        matches!(self, TickResult::Continue)
    }
}

/// Source of millisecond timestamps for pointer samples and frame ticks.
///
/// Production hosts use [`SystemClock`]; tests use a manually advanced
/// clock so every `dt` is chosen by the test.
pub trait FrameClock {
    /// Current time in milliseconds. Only differences are meaningful; the
    /// origin is unspecified.
    fn now_ms(&self) -> i64;
}

/// Wall-clock frame source backed by [`web_time::Instant`], so the same
/// code path works on native and wasm targets.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}

/// Clamp the elapsed time between two ticks into a usable physics delta.
///
/// Negative deltas (timestamp regressions on some platforms) collapse to
/// zero rather than running physics backwards.
pub fn clamp_frame_delta(last_ms: i64, now_ms: i64) -> f32 {
    let dt = (now_ms - last_ms) as f32;
    if dt <= 0.0 {
        0.0
    } else {
        dt.min(MAX_FRAME_DELTA_MS)
    }
}

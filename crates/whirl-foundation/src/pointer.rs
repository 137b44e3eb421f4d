//! Pointer sample types fed into the carousel by the host platform layer.

/// Lifecycle tag of a pointer sample within one touch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The platform interrupted the gesture (e.g. an incoming call or the
    /// browser reclaiming the touch).
    Cancel,
}

/// One raw pointer sample.
///
/// `time_ms` shares the origin of the host's frame clock. `cancelable`
/// reports whether the platform still allows suppressing its default scroll
/// for this sample; once the platform has begun its own scroll this goes
/// false and the carousel must not fight it.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub time_ms: i64,
    pub cancelable: bool,
}

impl PointerSample {
    pub fn new(phase: PointerPhase, x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            phase,
            x,
            y,
            time_ms,
            cancelable: true,
        }
    }

    pub fn non_cancelable(mut self) -> Self {
        self.cancelable = false;
        self
    }
}

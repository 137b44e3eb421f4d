//! Per-gesture drag session state.

use crate::axis_lock::{AxisLock, GestureAxis};
use crate::velocity_tracker::VelocityTracker;

/// Transient record of one touch session.
///
/// Created on pointer-down, dropped on up/cancel or when the axis lock
/// resolves vertical. Owns the classifier and the velocity history so
/// nothing about a gesture survives into the next one.
#[derive(Debug, Clone)]
pub struct DragSession {
    start_x: f32,
    /// Track offset at the moment the finger went down.
    start_offset: f32,
    axis: AxisLock,
    tracker: VelocityTracker,
    /// Last track offset applied during this drag, for move deltas.
    last_offset: f32,
}

impl DragSession {
    pub fn new(start_x: f32, start_y: f32, start_offset: f32, time_ms: i64) -> Self {
        let mut tracker = VelocityTracker::new();
        tracker.record(start_offset, time_ms);
        Self {
            start_x,
            start_offset,
            axis: AxisLock::new(start_x, start_y),
            tracker,
            last_offset: start_offset,
        }
    }

    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    /// Horizontal finger displacement since the session started.
    pub fn delta_x(&self, x: f32) -> f32 {
        x - self.start_x
    }

    /// Feed a move sample into the axis classifier.
    pub fn classify(&mut self, x: f32, y: f32) -> Option<GestureAxis> {
        self.axis.sample(x, y)
    }

    pub fn axis(&self) -> Option<GestureAxis> {
        self.axis.decided()
    }

    /// Record the applied track offset for velocity estimation and move
    /// deltas.
    pub fn track(&mut self, offset: f32, time_ms: i64) {
        self.tracker.record(offset, time_ms);
        self.last_offset = offset;
    }

    /// Release velocity in px/ms over the trailing window.
    pub fn release_velocity(&self) -> f32 {
        self.tracker.estimate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_tracks_offsets_and_velocity() {
        let mut session = DragSession::new(50.0, 80.0, -120.0, 0);
        assert_eq!(session.start_offset(), -120.0);
        assert_eq!(session.axis(), None);

        session.classify(70.0, 82.0);
        assert_eq!(session.axis(), Some(GestureAxis::Horizontal));

        session.track(-100.0, 40);
        session.track(-80.0, 80);
        assert_eq!(session.last_offset(), -80.0);
        // 40 px in 80 ms.
        assert!((session.release_velocity() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn delta_is_relative_to_the_down_point() {
        let session = DragSession::new(200.0, 10.0, 0.0, 0);
        assert_eq!(session.delta_x(150.0), -50.0);
    }
}

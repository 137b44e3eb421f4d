//! Gesture direction classification.
//!
//! From the first few pixels of movement a touch session is locked as
//! either a horizontal drag (the carousel owns it) or a vertical scroll
//! (the platform owns it). The lock happens exactly once per session and
//! is immutable afterwards, no matter where the finger goes next.

use crate::gesture_constants::{ANGLE_THRESHOLD_DEG, DEAD_ZONE_PX};

/// Resolved direction of a touch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAxis {
    Horizontal,
    Vertical,
}

/// One-shot axis classifier for a single touch session.
#[derive(Debug, Clone)]
pub struct AxisLock {
    start_x: f32,
    start_y: f32,
    dead_zone: f32,
    angle_threshold_deg: f32,
    decided: Option<GestureAxis>,
}

impl AxisLock {
    pub fn new(start_x: f32, start_y: f32) -> Self {
        Self::with_thresholds(start_x, start_y, DEAD_ZONE_PX, ANGLE_THRESHOLD_DEG)
    }

    pub fn with_thresholds(
        start_x: f32,
        start_y: f32,
        dead_zone: f32,
        angle_threshold_deg: f32,
    ) -> Self {
        Self {
            start_x,
            start_y,
            dead_zone,
            angle_threshold_deg,
            decided: None,
        }
    }

    /// Feed a move sample. Returns the locked axis once the displacement
    /// from the start point has left the dead zone; `None` while still
    /// undecided. After the first decision the same axis is returned for
    /// every subsequent sample.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<GestureAxis> {
        if let Some(axis) = self.decided {
            return Some(axis);
        }

        let dx = x - self.start_x;
        let dy = y - self.start_y;
        if dx.abs() < self.dead_zone && dy.abs() < self.dead_zone {
            return None;
        }

        // Angle of the displacement against the horizontal axis, folded
        // into the first quadrant.
        let angle_deg = dy.abs().atan2(dx.abs()).to_degrees();
        let axis = if angle_deg < self.angle_threshold_deg {
            GestureAxis::Horizontal
        } else {
            GestureAxis::Vertical
        };
        log::debug!("axis lock: {axis:?} (angle {angle_deg:.1}°, dx {dx:.1}, dy {dy:.1})");
        self.decided = Some(axis);
        Some(axis)
    }

    pub fn decided(&self) -> Option<GestureAxis> {
        self.decided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_undecided_inside_dead_zone() {
        let mut lock = AxisLock::new(100.0, 100.0);
        assert_eq!(lock.sample(103.0, 102.0), None);
        assert_eq!(lock.sample(96.0, 99.0), None);
        assert_eq!(lock.decided(), None);
    }

    #[test]
    fn shallow_angle_locks_horizontal() {
        let mut lock = AxisLock::new(0.0, 0.0);
        // 20 px right, 3 px down: ~8.5 degrees.
        assert_eq!(lock.sample(20.0, 3.0), Some(GestureAxis::Horizontal));
    }

    #[test]
    fn steep_angle_locks_vertical() {
        let mut lock = AxisLock::new(0.0, 0.0);
        // 2 px right, 20 px down: ~84 degrees.
        assert_eq!(lock.sample(2.0, 20.0), Some(GestureAxis::Vertical));
    }

    #[test]
    fn lock_is_immutable_for_the_session() {
        let mut lock = AxisLock::new(0.0, 0.0);
        assert_eq!(lock.sample(20.0, 0.0), Some(GestureAxis::Horizontal));
        // A later near-vertical displacement must not flip the decision.
        assert_eq!(lock.sample(21.0, 300.0), Some(GestureAxis::Horizontal));
        assert_eq!(lock.decided(), Some(GestureAxis::Horizontal));
    }

    #[test]
    fn leftward_drags_classify_horizontal_too() {
        let mut lock = AxisLock::new(200.0, 50.0);
        assert_eq!(lock.sample(170.0, 46.0), Some(GestureAxis::Horizontal));
    }

    #[test]
    fn threshold_boundary_prefers_vertical() {
        // Exactly at the threshold angle the rule is `angle < threshold`,
        // so the boundary itself is vertical.
        let mut lock = AxisLock::with_thresholds(0.0, 0.0, 5.0, 45.0);
        assert_eq!(lock.sample(10.0, 10.0), Some(GestureAxis::Vertical));
    }
}

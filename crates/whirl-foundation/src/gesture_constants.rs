//! Shared gesture tuning constants.
//!
//! Values are in logical pixels and milliseconds. They are deliberately in
//! one place so the classifier, tracker, and release heuristics stay
//! mutually consistent.

/// Dead zone around the touch-down point, in px on either axis.
///
/// Displacements inside this radius leave the gesture unclassified; the
/// first sample outside it locks the gesture axis. Large enough to ignore
/// finger jitter, small enough that the lock still feels immediate.
pub const DEAD_ZONE_PX: f32 = 7.0;

/// Maximum angle (degrees) between the displacement vector and the
/// horizontal axis for a gesture to classify as horizontal.
///
/// Anything steeper is yielded to native vertical scrolling.
pub const ANGLE_THRESHOLD_DEG: f32 = 70.0;

/// Trailing window for velocity estimation, in ms.
///
/// Only samples this recent contribute to the release velocity, which
/// makes the estimate immune to where the drag started.
pub const VELOCITY_WINDOW_MS: i64 = 100;

/// Velocities below this magnitude (px/ms) are treated as a standstill.
pub const STOP_VELOCITY: f32 = 0.05;

//! Raw input layer for the Whirl carousel: pointer sample types, the
//! axis-lock gesture classifier, the windowed velocity tracker, and the
//! per-gesture drag session record.

pub mod axis_lock;
pub mod drag;
pub mod gesture_constants;
pub mod pointer;
pub mod velocity_tracker;

pub use axis_lock::{AxisLock, GestureAxis};
pub use drag::DragSession;
pub use pointer::{PointerPhase, PointerSample};
pub use velocity_tracker::VelocityTracker;

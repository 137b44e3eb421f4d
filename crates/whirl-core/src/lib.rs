//! Runtime primitives shared by the Whirl carousel crates.
//!
//! The carousel core never schedules itself: the host owns the frame loop
//! and calls into the widget once per display frame. This crate provides the
//! clock seam that makes that contract explicit, plus the typed event bus
//! the widget publishes through.

pub mod clock;
pub mod events;

pub use clock::{clamp_frame_delta, FrameClock, SystemClock, TickResult, MAX_FRAME_DELTA_MS};
pub use events::{EventBus, Subscription};

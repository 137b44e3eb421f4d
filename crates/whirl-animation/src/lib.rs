//! Easing curves and motion physics.
//!
//! Three building blocks, all driven by externally supplied frame deltas so
//! they stay deterministic under a test clock: closed-form timed easing
//! animations, multiplicative friction decay for inertial coasting, and a
//! damped spring for settling onto a boundary.

pub mod easing;
pub mod physics;
pub mod timed;

pub use easing::Easing;
pub use physics::{BoundarySpring, FrictionDecay, SpringStep};
pub use timed::TimedAnimation;

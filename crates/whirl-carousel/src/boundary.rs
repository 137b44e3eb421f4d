//! Boundary policy: drag-time rubber band and the free-motion edge
//! response choice.

use crate::geometry::Bounds;

/// How the track behaves when free motion carries it past a bound.
///
/// Both variants settle exactly on the bound; they differ in feel. The
/// choice is deliberately configuration, not an implementation detail,
/// because both are legitimate designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeResponse {
    /// Heavy multiplicative damping until the track nearly stops, then a
    /// timed ease back to the bound. Feels like landing on a cushion.
    Pillow,
    /// Continuous restoring-force integration with damping. Feels like an
    /// elastic band and may overshoot once or twice before settling.
    Spring,
}

/// Sub-linear resistance for out-of-bounds drags.
///
/// Inside the bounds the desired offset passes through unchanged. Past a
/// bound the raw overshoot is compressed to `|overshoot|^power * ratio`,
/// so the track still follows the finger but resists harder the farther it
/// is pulled.
pub fn resist(desired: f32, bounds: Bounds, ratio: f32, power: f32) -> f32 {
    if desired > bounds.min {
        bounds.min + (desired - bounds.min).powf(power) * ratio
    } else if desired < bounds.max {
        bounds.max - (bounds.max - desired).powf(power) * ratio
    } else {
        desired
    }
}

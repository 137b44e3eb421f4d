//! Carousel configuration.

use crate::boundary::EdgeResponse;
use crate::geometry::Alignment;
use crate::snap::SnapMode;
use whirl_animation::BoundarySpring;
use whirl_foundation::gesture_constants::STOP_VELOCITY;

/// Tunables of one carousel instance.
///
/// The defaults reproduce the stock feel: centered slides, snapping with
/// velocity projection, spring edges. The two behavior choices the known
/// reference designs disagree on — snap-target heuristic and edge response —
/// are explicit options here rather than baked-in decisions.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub alignment: Alignment,
    /// When false the carousel free-scrolls and never snaps to a slide.
    pub snap: bool,
    pub snap_mode: SnapMode,
    pub edge_response: EdgeResponse,
    /// Fraction of the raw out-of-bounds overshoot applied after the
    /// power-law compression.
    pub resistance_ratio: f32,
    /// Exponent of the rubber-band compression; sub-linear (< 1).
    pub resistance_power: f32,
    /// Velocity retained per nominal frame while coasting; must be < 1.
    pub friction: f32,
    /// Velocity retained per nominal frame while out of bounds under the
    /// pillow response; much heavier than `friction`.
    pub pillow_friction: f32,
    pub spring: BoundarySpring,
    /// Velocities below this magnitude (px/ms) count as a standstill.
    pub stop_velocity: f32,
    /// Duration of the timed snap animation, in ms.
    pub snap_duration_ms: f32,
    /// Duration of the pillow ease back onto the bound, in ms.
    pub return_duration_ms: f32,
    /// How much velocity-worth of travel to project ahead when choosing a
    /// snap target, in ms.
    pub lookahead_ms: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::Center,
            snap: true,
            snap_mode: SnapMode::Projected,
            edge_response: EdgeResponse::Spring,
            resistance_ratio: 0.5,
            resistance_power: 0.7,
            friction: 0.95,
            pillow_friction: 0.6,
            spring: BoundarySpring::default(),
            stop_velocity: STOP_VELOCITY,
            snap_duration_ms: 300.0,
            return_duration_ms: 350.0,
            lookahead_ms: 160.0,
        }
    }
}

impl CarouselConfig {
    /// Free-scrolling preset: no snapping, pillow edges.
    pub fn free_scroll() -> Self {
        Self {
            snap: false,
            edge_response: EdgeResponse::Pillow,
            ..Self::default()
        }
    }
}

//! Frame-step physics: friction decay and the boundary spring.
//!
//! Velocities are in px/ms and deltas in ms throughout. Both models express
//! their per-frame coefficients relative to a nominal 60 Hz frame and
//! renormalize by the actual `dt`, so behavior is frame-rate independent.

/// Nominal frame length the per-frame coefficients are calibrated against.
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

/// Multiplicative velocity decay for inertial coasting.
///
/// `friction` is the fraction of velocity retained per nominal frame and
/// must be `< 1.0` for the decay to terminate.
#[derive(Debug, Clone, Copy)]
pub struct FrictionDecay {
    pub friction: f32,
}

impl FrictionDecay {
    pub fn new(friction: f32) -> Self {
        debug_assert!(friction > 0.0 && friction < 1.0);
        Self { friction }
    }

    /// Decay `velocity` over `dt_ms`.
    pub fn apply(&self, velocity: f32, dt_ms: f32) -> f32 {
        if dt_ms <= 0.0 {
            return velocity;
        }
        velocity * self.friction.powf(dt_ms / REFERENCE_FRAME_MS)
    }
}

/// Result of one spring integration step.
#[derive(Debug, Clone, Copy)]
pub struct SpringStep {
    pub position: f32,
    pub velocity: f32,
    /// True once both offset and velocity are inside the settle tolerances;
    /// `position` is then exactly the bound and `velocity` zero.
    pub settled: bool,
}

/// Damped restoring force pulling an out-of-bounds track back to a bound.
///
/// Semi-implicit Euler: the restoring acceleration is integrated into the
/// velocity, a damping multiplier bleeds energy, then the position advances
/// by the new velocity. The damping keeps the oscillation decaying, so the
/// step sequence always reaches the settle tolerances.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySpring {
    /// Restoring acceleration per pixel of displacement, in 1/ms^2.
    pub stiffness: f32,
    /// Fraction of velocity retained per nominal frame.
    pub damping: f32,
    /// Settle tolerance on the distance to the bound, in px.
    pub settle_offset: f32,
    /// Settle tolerance on the velocity, in px/ms.
    pub settle_velocity: f32,
}

impl Default for BoundarySpring {
    fn default() -> Self {
        Self {
            stiffness: 0.004,
            damping: 0.78,
            settle_offset: 0.5,
            settle_velocity: 0.05,
        }
    }
}

impl BoundarySpring {
    pub fn step(&self, position: f32, velocity: f32, bound: f32, dt_ms: f32) -> SpringStep {
        if dt_ms <= 0.0 {
            return SpringStep {
                position,
                velocity,
                settled: false,
            };
        }

        let force = (bound - position) * self.stiffness;
        let mut velocity = velocity + force * dt_ms;
        velocity *= self.damping.powf(dt_ms / REFERENCE_FRAME_MS);
        let position = position + velocity * dt_ms;

        if (bound - position).abs() < self.settle_offset && velocity.abs() < self.settle_velocity {
            SpringStep {
                position: bound,
                velocity: 0.0,
                settled: true,
            }
        } else {
            SpringStep {
                position,
                velocity,
                settled: false,
            }
        }
    }
}

//! Per-frame motion engine.
//!
//! A small state machine advancing the single track offset. Each phase has
//! one integration rule; the host feeds clamped frame deltas in and the
//! engine reports when a phase completes. Target selection (which slide to
//! snap to) lives outside the engine, so it stays free of any geometry
//! knowledge beyond the bounds.

use crate::boundary::EdgeResponse;
use crate::config::CarouselConfig;
use crate::geometry::Bounds;
use whirl_animation::{BoundarySpring, Easing, FrictionDecay, TimedAnimation};

/// Current phase of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Idle,
    /// The finger owns the offset; ticks are no-ops.
    Dragging,
    /// Free coasting with friction decay.
    Inertia,
    /// Out of bounds, settling back onto the violated bound.
    ReturningToBounds,
    /// Timed ease toward a snap target chosen on release.
    Snapping,
    /// Timed ease toward a programmatically requested slide.
    AnimatingToTarget,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    /// Motion continues; schedule another frame.
    Moving,
    /// Inertia decayed to a standstill in bounds. The engine is idle; the
    /// orchestrator decides whether a snap follows.
    InertiaEnded,
    /// The named phase ran to completion and the engine is idle.
    Settled(MotionPhase),
}

#[derive(Debug, Clone)]
enum ReturnState {
    Spring,
    PillowDamping,
    PillowEase(TimedAnimation),
}

/// Physics integrator for one carousel track.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    position: f32,
    velocity: f32,
    phase: MotionPhase,
    bounds: Bounds,

    edge_response: EdgeResponse,
    friction: FrictionDecay,
    pillow_friction: FrictionDecay,
    spring: BoundarySpring,
    stop_velocity: f32,
    return_duration_ms: f32,

    animation: Option<TimedAnimation>,
    return_state: Option<(f32, ReturnState)>,
}

impl MotionEngine {
    pub fn new(config: &CarouselConfig, bounds: Bounds) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            phase: MotionPhase::Idle,
            bounds,
            edge_response: config.edge_response,
            friction: FrictionDecay::new(config.friction),
            pillow_friction: FrictionDecay::new(config.pillow_friction),
            spring: config.spring,
            stop_velocity: config.stop_velocity,
            return_duration_ms: config.return_duration_ms,
            animation: None,
            return_state: None,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Whether ticks are currently doing work.
    pub fn is_live(&self) -> bool {
        matches!(
            self.phase,
            MotionPhase::Inertia
                | MotionPhase::ReturningToBounds
                | MotionPhase::Snapping
                | MotionPhase::AnimatingToTarget
        )
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Place the track directly, without animation. Used by geometry
    /// refresh.
    pub fn set_position(&mut self, position: f32) {
        self.position = position;
    }

    /// A new drag session starts: cancel whatever was in flight and let the
    /// current offset become the drag origin (catch the slider mid-flight).
    pub fn begin_drag(&mut self) {
        if self.is_live() {
            log::debug!("drag interrupts {:?} at {:.1}", self.phase, self.position);
        }
        self.phase = MotionPhase::Dragging;
        self.velocity = 0.0;
        self.animation = None;
        self.return_state = None;
    }

    /// The finger moved; the offset is already resistance-adjusted.
    pub fn drag_to(&mut self, position: f32) {
        debug_assert_eq!(self.phase, MotionPhase::Dragging);
        self.position = position;
    }

    /// Stop all motion immediately, keeping the current offset.
    pub fn stop(&mut self) {
        self.phase = MotionPhase::Idle;
        self.velocity = 0.0;
        self.animation = None;
        self.return_state = None;
    }

    /// Start free coasting with the given release velocity (px/ms).
    pub fn start_inertia(&mut self, velocity: f32) {
        log::debug!("inertia from {:.1} at {:.3} px/ms", self.position, velocity);
        self.phase = MotionPhase::Inertia;
        self.velocity = velocity;
        self.animation = None;
        self.return_state = None;
    }

    /// Start settling back onto the violated bound, carrying `velocity`
    /// into the edge response. No-op reverting to idle when in bounds.
    pub fn start_return(&mut self, velocity: f32) {
        self.velocity = velocity;
        match self.bounds.violated(self.position) {
            Some(bound) => self.enter_return(bound),
            None => self.stop(),
        }
    }

    /// Start the timed snap animation chosen on release.
    pub fn start_snap(&mut self, target: f32, duration_ms: f32, easing: Easing) {
        log::debug!("snap {:.1} -> {:.1}", self.position, target);
        self.phase = MotionPhase::Snapping;
        self.velocity = 0.0;
        self.return_state = None;
        self.animation = Some(TimedAnimation::new(self.position, target, duration_ms, easing));
    }

    /// Start a programmatic move to a slide offset.
    pub fn start_goto(&mut self, target: f32, duration_ms: f32, easing: Easing) {
        log::debug!("goto {:.1} -> {:.1}", self.position, target);
        self.phase = MotionPhase::AnimatingToTarget;
        self.velocity = 0.0;
        self.return_state = None;
        self.animation = Some(TimedAnimation::new(self.position, target, duration_ms, easing));
    }

    fn enter_return(&mut self, bound: f32) {
        log::debug!(
            "returning to bound {bound:.1} from {:.1} ({:?})",
            self.position,
            self.edge_response
        );
        self.phase = MotionPhase::ReturningToBounds;
        self.animation = None;
        self.return_state = Some((
            bound,
            match self.edge_response {
                EdgeResponse::Spring => ReturnState::Spring,
                EdgeResponse::Pillow => ReturnState::PillowDamping,
            },
        ));
    }

    /// Advance by one frame. `dt_ms` must already be clamped by the caller.
    pub fn tick(&mut self, dt_ms: f32) -> StepSignal {
        match self.phase {
            MotionPhase::Idle | MotionPhase::Dragging => StepSignal::Moving,
            MotionPhase::Inertia => self.tick_inertia(dt_ms),
            MotionPhase::ReturningToBounds => self.tick_return(dt_ms),
            MotionPhase::Snapping | MotionPhase::AnimatingToTarget => self.tick_animation(dt_ms),
        }
    }

    fn tick_inertia(&mut self, dt_ms: f32) -> StepSignal {
        if dt_ms <= 0.0 {
            return StepSignal::Moving;
        }
        self.position += self.velocity * dt_ms;
        self.velocity = self.friction.apply(self.velocity, dt_ms);

        if let Some(bound) = self.bounds.violated(self.position) {
            self.enter_return(bound);
            return StepSignal::Moving;
        }
        if self.velocity.abs() < self.stop_velocity {
            self.velocity = 0.0;
            self.phase = MotionPhase::Idle;
            return StepSignal::InertiaEnded;
        }
        StepSignal::Moving
    }

    fn tick_return(&mut self, dt_ms: f32) -> StepSignal {
        let Some((bound, state)) = self.return_state.as_mut() else {
            // Unreachable in practice; degrade to a hard stop on the
            // nearest valid offset.
            self.position = self.bounds.clamp(self.position);
            self.stop();
            return StepSignal::Settled(MotionPhase::ReturningToBounds);
        };
        let bound = *bound;

        match &mut *state {
            ReturnState::Spring => {
                let step = self.spring.step(self.position, self.velocity, bound, dt_ms);
                self.position = step.position;
                self.velocity = step.velocity;
                if step.settled {
                    self.return_state = None;
                    self.phase = MotionPhase::Idle;
                    return StepSignal::Settled(MotionPhase::ReturningToBounds);
                }
                StepSignal::Moving
            }
            ReturnState::PillowDamping => {
                if dt_ms > 0.0 {
                    self.position += self.velocity * dt_ms;
                    self.velocity = self.pillow_friction.apply(self.velocity, dt_ms);
                }
                if self.velocity.abs() < self.stop_velocity {
                    self.velocity = 0.0;
                    *state = ReturnState::PillowEase(TimedAnimation::new(
                        self.position,
                        bound,
                        self.return_duration_ms,
                        Easing::EaseOut,
                    ));
                }
                StepSignal::Moving
            }
            ReturnState::PillowEase(anim) => {
                self.position = anim.advance(dt_ms);
                if anim.is_finished() {
                    self.position = bound;
                    self.return_state = None;
                    self.phase = MotionPhase::Idle;
                    return StepSignal::Settled(MotionPhase::ReturningToBounds);
                }
                StepSignal::Moving
            }
        }
    }

    fn tick_animation(&mut self, dt_ms: f32) -> StepSignal {
        let finished = match self.animation.as_mut() {
            Some(anim) => {
                self.position = anim.advance(dt_ms);
                anim.is_finished()
            }
            None => true,
        };
        if finished {
            let done = self.phase;
            self.animation = None;
            self.phase = MotionPhase::Idle;
            return StepSignal::Settled(done);
        }
        StepSignal::Moving
    }
}

//! Carousel orchestration: pointer ingestion, release decisions, frame
//! ticks, and event publication.

use crate::boundary;
use crate::config::CarouselConfig;
use crate::engine::{MotionEngine, MotionPhase, StepSignal};
use crate::error::CarouselError;
use crate::events::{CarouselEvent, EventKind};
use crate::geometry::{Bounds, SlideGeometry, SlideGrid};
use crate::snap;
use std::rc::Rc;
use whirl_animation::Easing;
use whirl_core::clock::{clamp_frame_delta, TickResult};
use whirl_core::events::{EventBus, Subscription};
use whirl_foundation::drag::DragSession;
use whirl_foundation::pointer::{PointerPhase, PointerSample};
use whirl_foundation::GestureAxis;

/// What the host should do with the pointer sample it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputReaction {
    /// Not ours; let the platform's default behavior proceed.
    Pass,
    /// The gesture is horizontal and the sample was consumed; suppress the
    /// platform's native scroll for it.
    Claim,
}

/// Visibility of the last slide, derived fresh from the offset every time
/// rather than tracked incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EdgeVisibility {
    Hidden,
    Partial,
    Full,
}

/// A touch-driven horizontal carousel.
///
/// Owns all mutable state of one instance; the host owns the frame loop,
/// the geometry, and the actual rendering of the track offset.
pub struct Carousel<G: SlideGeometry> {
    geometry: G,
    config: CarouselConfig,
    grid: SlideGrid,
    bounds: Bounds,
    engine: MotionEngine,
    session: Option<DragSession>,
    events: EventBus<EventKind, CarouselEvent>,
    applier: Rc<dyn Fn(f32)>,
    current_index: usize,
    /// Slide index a running snap/goto animation was aimed at; wins over
    /// nearest-at-settle so a bounds-clamped target still lands on the
    /// chosen slide.
    pending_index: Option<usize>,
    last_tick_ms: Option<i64>,
    last_visibility: EdgeVisibility,
    torn_down: bool,
}

impl<G: SlideGeometry> Carousel<G> {
    /// Build a carousel over `geometry`, resting on the first slide.
    ///
    /// `applier` receives every track offset the carousel produces and is
    /// expected to translate the slide-holding element (typically via a
    /// hardware-accelerated transform).
    pub fn new(
        geometry: G,
        config: CarouselConfig,
        applier: impl Fn(f32) + 'static,
    ) -> Result<Self, CarouselError> {
        let width = geometry.container_width();
        if !width.is_finite() || width <= 0.0 {
            return Err(CarouselError::InvalidContainer { width });
        }

        let grid = SlideGrid::build(&geometry, config.alignment);
        let bounds = grid.bounds(&geometry, config.alignment);
        if grid.is_empty() {
            log::warn!("carousel constructed with zero slides; all motion is a no-op");
        }

        let mut engine = MotionEngine::new(&config, bounds);
        let initial = bounds.clamp(grid.offset(0));
        engine.set_position(initial);
        (applier)(initial);

        let mut carousel = Self {
            geometry,
            config,
            grid,
            bounds,
            engine,
            session: None,
            events: EventBus::new(),
            applier: Rc::new(applier),
            current_index: 0,
            pending_index: None,
            last_tick_ms: None,
            last_visibility: EdgeVisibility::Hidden,
            torn_down: false,
        };
        carousel.last_visibility = carousel.edge_visibility(initial);
        Ok(carousel)
    }

    pub fn offset(&self) -> f32 {
        self.engine.position()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> MotionPhase {
        self.engine.phase()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn grid(&self) -> &SlideGrid {
        &self.grid
    }

    /// Whether frame ticks are currently wanted.
    pub fn is_animating(&self) -> bool {
        self.engine.is_live()
    }

    pub fn subscribe(
        &self,
        kind: EventKind,
        handler: impl Fn(&CarouselEvent) + 'static,
    ) -> Subscription {
        self.events.subscribe(kind, handler)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.events.unsubscribe(subscription);
    }

    /// Feed one raw pointer sample.
    pub fn handle_pointer(&mut self, sample: PointerSample) -> InputReaction {
        if self.torn_down {
            return InputReaction::Pass;
        }
        match sample.phase {
            PointerPhase::Down => self.on_down(sample),
            PointerPhase::Move => self.on_move(sample),
            PointerPhase::Up => self.on_up(sample),
            PointerPhase::Cancel => self.on_cancel(sample),
        }
    }

    fn on_down(&mut self, sample: PointerSample) -> InputReaction {
        // Catch the slider mid-flight: whatever was animating stops and the
        // current offset becomes the drag origin.
        self.engine.begin_drag();
        self.pending_index = None;
        self.session = Some(DragSession::new(
            sample.x,
            sample.y,
            self.engine.position(),
            sample.time_ms,
        ));
        // Ownership is not decided yet; the platform may still scroll.
        InputReaction::Pass
    }

    fn on_move(&mut self, sample: PointerSample) -> InputReaction {
        let Some(mut session) = self.session.take() else {
            return InputReaction::Pass;
        };

        let was_locked = session.axis().is_some();
        match session.classify(sample.x, sample.y) {
            None => {
                self.session = Some(session);
                InputReaction::Pass
            }
            Some(GestureAxis::Vertical) => {
                // Yield to native scrolling; the session is over for us.
                // The touch may have caught the track off-grid or out of
                // bounds, so park rather than freeze in place.
                self.park(sample.time_ms);
                InputReaction::Pass
            }
            Some(GestureAxis::Horizontal) => {
                if !was_locked {
                    self.emit(CarouselEvent::DragStart);
                }
                if !sample.cancelable {
                    // The platform already started its own scroll for this
                    // sample; applying an offset too would double-scroll.
                    self.session = Some(session);
                    return InputReaction::Pass;
                }

                let desired = session.start_offset() + session.delta_x(sample.x);
                let applied = boundary::resist(
                    desired,
                    self.bounds,
                    self.config.resistance_ratio,
                    self.config.resistance_power,
                );
                let delta = applied - session.last_offset();
                self.engine.drag_to(applied);
                (self.applier)(applied);
                session.track(applied, sample.time_ms);
                self.session = Some(session);

                self.emit(CarouselEvent::Move { offset: applied, delta });
                self.update_visibility(applied);
                InputReaction::Claim
            }
        }
    }

    fn on_up(&mut self, sample: PointerSample) -> InputReaction {
        let Some(session) = self.session.take() else {
            return InputReaction::Pass;
        };
        if session.axis() != Some(GestureAxis::Horizontal) {
            // A tap or an unresolved gesture: no drag happened, but the
            // touch may have caught a mid-flight animation. Park quietly.
            self.park(sample.time_ms);
            return InputReaction::Pass;
        }

        self.emit(CarouselEvent::DragEnd);

        let mut velocity = session.release_velocity();
        if velocity.abs() < self.config.stop_velocity {
            velocity = 0.0;
        }
        log::debug!(
            "release at {:.1} with {:.3} px/ms",
            self.engine.position(),
            velocity
        );
        self.start_release_motion(velocity, sample.time_ms);
        InputReaction::Pass
    }

    fn on_cancel(&mut self, sample: PointerSample) -> InputReaction {
        let Some(session) = self.session.take() else {
            return InputReaction::Pass;
        };
        if session.axis() != Some(GestureAxis::Horizontal) {
            self.park(sample.time_ms);
            return InputReaction::Pass;
        }

        // Abandoned gesture: revert to the nearest rest state with no
        // inertia.
        self.emit(CarouselEvent::DragEnd);
        self.start_release_motion(0.0, sample.time_ms);
        InputReaction::Pass
    }

    /// Settle a touch that never became a drag. If it interrupted motion
    /// the track may be off-grid or out of bounds; move it to the nearest
    /// rest state without drag events.
    fn park(&mut self, time_ms: i64) {
        let position = self.engine.position();
        if !self.bounds.contains(position) {
            self.last_tick_ms = Some(time_ms);
            self.engine.start_return(0.0);
            return;
        }
        if self.config.snap {
            if let Some(target) = snap::nearest(&self.grid, self.bounds, position) {
                if (target.offset - position).abs() > 0.5 {
                    self.last_tick_ms = Some(time_ms);
                    self.pending_index = Some(target.index);
                    self.emit(CarouselEvent::SnapStart {
                        target_index: target.index,
                    });
                    self.engine.start_snap(
                        target.offset,
                        self.config.snap_duration_ms,
                        Easing::EaseOut,
                    );
                    return;
                }
            }
        }
        self.engine.stop();
    }

    /// Decide what happens after the finger leaves the track.
    fn start_release_motion(&mut self, velocity: f32, time_ms: i64) {
        self.last_tick_ms = Some(time_ms);
        let position = self.engine.position();
        let out_of_bounds = !self.bounds.contains(position);

        if out_of_bounds && velocity == 0.0 {
            // Too slow for physics to matter; settle straight back.
            self.engine.start_return(velocity);
            return;
        }

        if self.config.snap && !out_of_bounds && !self.grid.is_empty() {
            let target = snap::select(
                &self.grid,
                self.bounds,
                self.config.snap_mode,
                self.current_index,
                position,
                velocity,
                self.config.lookahead_ms,
            );
            if let Some(target) = target {
                self.pending_index = Some(target.index);
                self.emit(CarouselEvent::SnapStart {
                    target_index: target.index,
                });
                self.engine
                    .start_snap(target.offset, self.config.snap_duration_ms, Easing::EaseOut);
            }
            return;
        }

        if velocity == 0.0 {
            if out_of_bounds {
                self.engine.start_return(0.0);
            } else {
                self.engine.stop();
                self.emit(CarouselEvent::Stop { offset: position });
            }
            return;
        }

        self.engine.start_inertia(velocity);
    }

    /// Advance motion by one display frame.
    ///
    /// `now_ms` shares the origin of the pointer timestamps. Returns
    /// [`TickResult::Halt`] once no further frames are needed.
    pub fn tick(&mut self, now_ms: i64) -> TickResult {
        if self.torn_down || !self.engine.is_live() {
            return TickResult::Halt;
        }

        let dt = match self.last_tick_ms {
            Some(last) => clamp_frame_delta(last, now_ms),
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);

        let before = self.engine.position();
        let signal = self.engine.tick(dt);
        let position = self.engine.position();

        if position != before {
            (self.applier)(position);
            self.emit(CarouselEvent::Move {
                offset: position,
                delta: position - before,
            });
        }
        self.update_visibility(position);

        match signal {
            StepSignal::Moving => TickResult::Continue,
            StepSignal::InertiaEnded => {
                if self.config.snap && !self.grid.is_empty() {
                    // Coasting ran out in snap mode; ease onto the nearest
                    // slide from here.
                    if let Some(target) = snap::nearest(&self.grid, self.bounds, position) {
                        self.pending_index = Some(target.index);
                        self.emit(CarouselEvent::SnapStart {
                            target_index: target.index,
                        });
                        self.engine.start_snap(
                            target.offset,
                            self.config.snap_duration_ms,
                            Easing::EaseOut,
                        );
                        return TickResult::Continue;
                    }
                }
                self.settle(position)
            }
            StepSignal::Settled(_) => self.settle(position),
        }
    }

    /// Terminal bookkeeping shared by every way motion can end.
    fn settle(&mut self, position: f32) -> TickResult {
        let landed = self
            .pending_index
            .take()
            .or_else(|| snap::nearest(&self.grid, self.bounds, position).map(|rest| rest.index));
        if let Some(index) = landed {
            if index != self.current_index {
                let previous = self.current_index;
                self.current_index = index;
                self.emit(CarouselEvent::SlideChange {
                    index,
                    previous_index: previous,
                });
            }
        }
        self.emit(CarouselEvent::Stop { offset: position });
        TickResult::Halt
    }

    /// Animate to a specific slide. Out-of-range indices clamp to the last
    /// slide; a zero-slide carousel ignores the call.
    pub fn snap_to(&mut self, index: usize, now_ms: i64) {
        if self.torn_down || self.grid.is_empty() {
            return;
        }
        if self.engine.phase() == MotionPhase::Dragging {
            // The finger owns the track; programmatic moves wait.
            return;
        }
        let index = index.min(self.grid.len() - 1);
        let target = self.bounds.clamp(self.grid.offset(index));
        self.last_tick_ms = Some(now_ms);
        self.pending_index = Some(index);
        self.emit(CarouselEvent::SnapStart {
            target_index: index,
        });
        self.engine
            .start_goto(target, self.config.snap_duration_ms, Easing::EaseOut);
    }

    pub fn next(&mut self, now_ms: i64) {
        self.snap_to(self.current_index + 1, now_ms);
    }

    pub fn prev(&mut self, now_ms: i64) {
        self.snap_to(self.current_index.saturating_sub(1), now_ms);
    }

    /// Recompute the slide grid and bounds after the host geometry changed
    /// (typically a container resize), then reposition instantly on the
    /// nearest slide. Idempotent when the geometry is unchanged.
    pub fn refresh_geometry(&mut self) {
        if self.torn_down {
            return;
        }
        self.engine.stop();
        self.session = None;
        self.pending_index = None;
        self.grid = SlideGrid::build(&self.geometry, self.config.alignment);
        self.bounds = self.grid.bounds(&self.geometry, self.config.alignment);
        self.engine.set_bounds(self.bounds);

        let position = self.engine.position();
        let rest = match snap::nearest(&self.grid, self.bounds, position) {
            Some(target) => target.offset,
            None => 0.0,
        };
        self.engine.set_position(rest);
        (self.applier)(rest);
        if let Some(target) = snap::nearest(&self.grid, self.bounds, rest) {
            if target.index != self.current_index {
                let previous = self.current_index;
                self.current_index = target.index;
                self.emit(CarouselEvent::SlideChange {
                    index: target.index,
                    previous_index: previous,
                });
            }
        }
        self.update_visibility(rest);
    }

    /// Cancel any in-flight motion and drop every subscriber. The carousel
    /// stays safe to call into but does nothing afterwards.
    pub fn teardown(&mut self) {
        self.engine.stop();
        self.session = None;
        self.pending_index = None;
        self.events.clear();
        self.torn_down = true;
    }

    fn emit(&self, event: CarouselEvent) {
        log::trace!("event: {event:?}");
        self.events.emit(event.kind(), &event);
    }

    fn edge_visibility(&self, offset: f32) -> EdgeVisibility {
        if self.grid.is_empty() {
            return EdgeVisibility::Hidden;
        }
        let last = self.grid.len() - 1;
        let left = self.geometry.slide_left(last) + offset;
        let right = left + self.geometry.slide_width(last);
        let container = self.geometry.container_width();
        if right <= container {
            EdgeVisibility::Full
        } else if left < container {
            EdgeVisibility::Partial
        } else {
            EdgeVisibility::Hidden
        }
    }

    fn update_visibility(&mut self, offset: f32) {
        let now = self.edge_visibility(offset);
        let before = self.last_visibility;
        self.last_visibility = now;
        if before == EdgeVisibility::Hidden && now >= EdgeVisibility::Partial {
            self.emit(CarouselEvent::LastSlideVisibleStart);
        }
        if before < EdgeVisibility::Full && now == EdgeVisibility::Full {
            self.emit(CarouselEvent::LastSlideVisibleFull);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct ThreeSlides;

    impl SlideGeometry for ThreeSlides {
        fn container_width(&self) -> f32 {
            300.0
        }
        fn slide_count(&self) -> usize {
            3
        }
        fn slide_width(&self, _index: usize) -> f32 {
            300.0
        }
        fn slide_margin(&self, _index: usize) -> f32 {
            0.0
        }
        fn slide_left(&self, index: usize) -> f32 {
            index as f32 * 300.0
        }
    }

    fn leading_config() -> CarouselConfig {
        CarouselConfig {
            alignment: crate::geometry::Alignment::Start,
            ..CarouselConfig::default()
        }
    }

    fn carousel() -> (Carousel<ThreeSlides>, Rc<RefCell<Vec<f32>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        let carousel = Carousel::new(ThreeSlides, leading_config(), move |offset| {
            sink.borrow_mut().push(offset);
        })
        .unwrap();
        (carousel, applied)
    }

    fn sample(phase: PointerPhase, x: f32, y: f32, t: i64) -> PointerSample {
        PointerSample::new(phase, x, y, t)
    }

    #[test]
    fn invalid_container_fails_construction() {
        struct NoContainer;
        impl SlideGeometry for NoContainer {
            fn container_width(&self) -> f32 {
                0.0
            }
            fn slide_count(&self) -> usize {
                0
            }
            fn slide_width(&self, _index: usize) -> f32 {
                0.0
            }
            fn slide_margin(&self, _index: usize) -> f32 {
                0.0
            }
            fn slide_left(&self, _index: usize) -> f32 {
                0.0
            }
        }
        let result = Carousel::new(NoContainer, CarouselConfig::default(), |_| {});
        assert_eq!(
            result.err(),
            Some(CarouselError::InvalidContainer { width: 0.0 })
        );
    }

    #[test]
    fn construction_rests_on_the_first_slide() {
        let (carousel, applied) = carousel();
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(applied.borrow().as_slice(), &[0.0]);
    }

    #[test]
    fn vertical_gestures_are_passed_through_untouched() {
        let (mut carousel, applied) = carousel();
        assert_eq!(
            carousel.handle_pointer(sample(PointerPhase::Down, 100.0, 100.0, 0)),
            InputReaction::Pass
        );
        assert_eq!(
            carousel.handle_pointer(sample(PointerPhase::Move, 102.0, 140.0, 16)),
            InputReaction::Pass
        );
        // Later horizontal movement must not resurrect the session.
        assert_eq!(
            carousel.handle_pointer(sample(PointerPhase::Move, 180.0, 140.0, 32)),
            InputReaction::Pass
        );
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(applied.borrow().len(), 1); // only the construction apply
    }

    #[test]
    fn horizontal_drag_moves_the_track_and_claims_the_samples() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 200.0, 50.0, 0));
        assert_eq!(
            carousel.handle_pointer(sample(PointerPhase::Move, 160.0, 52.0, 16)),
            InputReaction::Claim
        );
        assert_eq!(carousel.offset(), -40.0);
        assert_eq!(carousel.phase(), MotionPhase::Dragging);
    }

    #[test]
    fn non_cancelable_move_applies_no_offset() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 200.0, 50.0, 0));
        carousel.handle_pointer(sample(PointerPhase::Move, 160.0, 52.0, 16));
        let before = carousel.offset();
        assert_eq!(
            carousel.handle_pointer(
                sample(PointerPhase::Move, 120.0, 52.0, 32).non_cancelable()
            ),
            InputReaction::Pass
        );
        assert_eq!(carousel.offset(), before);
    }

    #[test]
    fn drag_past_the_bound_is_resisted() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 100.0, 50.0, 0));
        // 100 px rightward from offset 0: raw desired +100, resisted to
        // ~12.6.
        carousel.handle_pointer(sample(PointerPhase::Move, 200.0, 50.0, 16));
        let offset = carousel.offset();
        assert!((offset - 12.56).abs() < 0.05, "got {offset}");
    }

    #[test]
    fn low_velocity_out_of_bounds_release_skips_inertia() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 100.0, 50.0, 0));
        // Creep out past the right bound slowly, then hold still so the
        // windowed velocity decays to ~0 before release.
        carousel.handle_pointer(sample(PointerPhase::Move, 140.0, 50.0, 100));
        carousel.handle_pointer(sample(PointerPhase::Move, 141.0, 50.0, 400));
        carousel.handle_pointer(sample(PointerPhase::Move, 141.0, 50.0, 700));
        assert!(carousel.offset() > 0.0);
        carousel.handle_pointer(sample(PointerPhase::Up, 141.0, 50.0, 800));
        assert_eq!(carousel.phase(), MotionPhase::ReturningToBounds);
    }

    #[test]
    fn in_bounds_release_with_snap_enters_snapping() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 280.0, 50.0, 0));
        carousel.handle_pointer(sample(PointerPhase::Move, 160.0, 50.0, 40));
        carousel.handle_pointer(sample(PointerPhase::Move, 80.0, 50.0, 80));
        carousel.handle_pointer(sample(PointerPhase::Up, 80.0, 50.0, 90));
        assert_eq!(carousel.phase(), MotionPhase::Snapping);
    }

    #[test]
    fn cancel_reverts_with_no_inertia() {
        let (mut carousel, _) = carousel();
        carousel.handle_pointer(sample(PointerPhase::Down, 280.0, 50.0, 0));
        carousel.handle_pointer(sample(PointerPhase::Move, 120.0, 50.0, 40));
        carousel.handle_pointer(sample(PointerPhase::Cancel, 120.0, 50.0, 50));
        // Snap mode: an abandoned in-bounds gesture snaps to the nearest
        // slide with zero velocity.
        assert_eq!(carousel.phase(), MotionPhase::Snapping);
    }

    #[test]
    fn vertical_resolution_mid_return_does_not_strand_the_track() {
        let (mut carousel, _) = carousel();
        // Creep past the right bound and release at a standstill so the
        // track is springing back.
        carousel.handle_pointer(sample(PointerPhase::Down, 100.0, 50.0, 0));
        carousel.handle_pointer(sample(PointerPhase::Move, 160.0, 50.0, 100));
        carousel.handle_pointer(sample(PointerPhase::Move, 161.0, 50.0, 400));
        carousel.handle_pointer(sample(PointerPhase::Move, 161.0, 50.0, 700));
        carousel.handle_pointer(sample(PointerPhase::Up, 161.0, 50.0, 800));
        assert_eq!(carousel.phase(), MotionPhase::ReturningToBounds);
        carousel.tick(816);
        assert!(carousel.offset() > 0.0);

        // A new touch catches the return mid-flight, then resolves
        // vertical. The carousel yields the gesture but must still bring
        // the track back in bounds.
        carousel.handle_pointer(sample(PointerPhase::Down, 150.0, 50.0, 832));
        carousel.handle_pointer(sample(PointerPhase::Move, 151.0, 90.0, 848));
        assert!(carousel.is_animating());
        let mut now = 864;
        while carousel.tick(now) == TickResult::Continue {
            now += 16;
            assert!(now < 20_000);
        }
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn snap_to_clamps_and_animates() {
        let (mut carousel, _) = carousel();
        carousel.snap_to(99, 0);
        assert_eq!(carousel.phase(), MotionPhase::AnimatingToTarget);
        let mut now = 0;
        while carousel.tick(now) == TickResult::Continue {
            now += 16;
            assert!(now < 10_000);
        }
        assert_eq!(carousel.offset(), -600.0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn refresh_geometry_is_idempotent() {
        let (mut carousel, _) = carousel();
        carousel.refresh_geometry();
        let grid_once = carousel.grid().clone();
        let bounds_once = carousel.bounds();
        carousel.refresh_geometry();
        assert_eq!(carousel.grid(), &grid_once);
        assert_eq!(carousel.bounds(), bounds_once);
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn teardown_makes_the_carousel_inert() {
        let (mut carousel, applied) = carousel();
        let moves = Rc::new(RefCell::new(0));
        let moves_in = Rc::clone(&moves);
        carousel.subscribe(EventKind::Move, move |_| {
            *moves_in.borrow_mut() += 1;
        });
        carousel.teardown();

        carousel.handle_pointer(sample(PointerPhase::Down, 200.0, 50.0, 0));
        carousel.handle_pointer(sample(PointerPhase::Move, 100.0, 50.0, 16));
        assert_eq!(carousel.tick(32), TickResult::Halt);
        assert_eq!(*moves.borrow(), 0);
        assert_eq!(applied.borrow().len(), 1);
    }
}

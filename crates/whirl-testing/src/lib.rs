//! Headless harness for exercising carousels in tests.
//!
//! Mirrors how the widget runs in production — pointer samples in, frame
//! ticks until the engine halts — but with a manually advanced clock so
//! every `dt` is chosen by the test and runs are fully deterministic.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use whirl_carousel::{Carousel, CarouselEvent, EventKind, SlideGeometry};
use whirl_core::{FrameClock, TickResult};
use whirl_foundation::{PointerPhase, PointerSample};

/// Test clock advanced explicitly, in milliseconds.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
        }
    }

    pub fn advance(&self, ms: i64) -> i64 {
        self.now.set(self.now.get() + ms);
        self.now.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

/// Fixed slide geometry for tests: equal-width slides laid out left to
/// right with one shared margin.
pub struct StaticGeometry {
    pub container: f32,
    pub slide_width: f32,
    pub margin: f32,
    pub count: usize,
}

impl StaticGeometry {
    /// The reference scenario: three 300 px slides in a 300 px container.
    pub fn three_by_300() -> Self {
        Self {
            container: 300.0,
            slide_width: 300.0,
            margin: 0.0,
            count: 3,
        }
    }
}

impl SlideGeometry for StaticGeometry {
    fn container_width(&self) -> f32 {
        self.container
    }
    fn slide_count(&self) -> usize {
        self.count
    }
    fn slide_width(&self, _index: usize) -> f32 {
        self.slide_width
    }
    fn slide_margin(&self, _index: usize) -> f32 {
        self.margin
    }
    fn slide_left(&self, index: usize) -> f32 {
        index as f32 * (self.slide_width + self.margin)
    }
}

/// Records every event a carousel emits, in emission order.
pub struct EventLog {
    events: Rc<RefCell<Vec<CarouselEvent>>>,
}

impl EventLog {
    pub fn attach<G: SlideGeometry>(carousel: &Carousel<G>) -> Self {
        let events: Rc<RefCell<Vec<CarouselEvent>>> = Rc::new(RefCell::new(Vec::new()));
        for kind in EventKind::ALL {
            let sink = Rc::clone(&events);
            carousel.subscribe(kind, move |event| sink.borrow_mut().push(*event));
        }
        Self { events }
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(|event| event.kind()).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Drives scripted gestures and frame pumping against one carousel.
pub struct SwipeRobot<'a, G: SlideGeometry> {
    carousel: &'a mut Carousel<G>,
    clock: ManualClock,
}

impl<'a, G: SlideGeometry> SwipeRobot<'a, G> {
    pub fn new(carousel: &'a mut Carousel<G>, clock: ManualClock) -> Self {
        Self { carousel, clock }
    }

    pub fn carousel(&mut self) -> &mut Carousel<G> {
        self.carousel
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn press(&mut self, x: f32, y: f32) {
        let sample = PointerSample::new(PointerPhase::Down, x, y, self.clock.now_ms());
        self.carousel.handle_pointer(sample);
    }

    /// Move the finger to `(x, y)` after advancing the clock by `dt_ms`.
    pub fn move_to(&mut self, x: f32, y: f32, dt_ms: i64) {
        self.clock.advance(dt_ms);
        let sample = PointerSample::new(PointerPhase::Move, x, y, self.clock.now_ms());
        self.carousel.handle_pointer(sample);
    }

    pub fn release(&mut self) {
        let sample =
            PointerSample::new(PointerPhase::Up, 0.0, 0.0, self.clock.now_ms());
        self.carousel.handle_pointer(sample);
    }

    pub fn cancel(&mut self) {
        let sample =
            PointerSample::new(PointerPhase::Cancel, 0.0, 0.0, self.clock.now_ms());
        self.carousel.handle_pointer(sample);
    }

    /// A full horizontal swipe: press, evenly spaced moves, release.
    ///
    /// `duration_ms` spreads over `steps` moves, so the release velocity is
    /// `(to - from) / duration` px/ms for a straight drag.
    pub fn swipe(&mut self, from: (f32, f32), to: (f32, f32), steps: usize, duration_ms: i64) {
        assert!(steps > 0);
        self.press(from.0, from.1);
        let step_ms = duration_ms / steps as i64;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.move_to(x, y, step_ms);
        }
        self.release();
    }

    /// Pump 16 ms frames until the carousel halts. Panics if it does not
    /// settle within `max_frames`, which would mean the physics diverged.
    pub fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            let now = self.clock.advance(16);
            if self.carousel.tick(now) == TickResult::Halt {
                log::debug!("settled after {frame} frames at {}", self.carousel.offset());
                return frame;
            }
        }
        panic!(
            "carousel failed to settle within {max_frames} frames (offset {})",
            self.carousel.offset()
        );
    }
}

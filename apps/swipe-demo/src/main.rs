//! Headless walkthrough of the carousel: a flick that snaps two slides
//! ahead, a programmatic snap back, and a rubber-band drag past the first
//! slide. Every event the widget publishes is printed as it fires.

use anyhow::Result;
use whirl_carousel::{
    Alignment, Carousel, CarouselConfig, EventKind, SlideGeometry,
};
use whirl_core::TickResult;
use whirl_foundation::{PointerPhase, PointerSample};

/// Five equal slides laid out edge to edge, phone-sized.
struct Strip;

impl SlideGeometry for Strip {
    fn container_width(&self) -> f32 {
        360.0
    }
    fn slide_count(&self) -> usize {
        5
    }
    fn slide_width(&self, _index: usize) -> f32 {
        360.0
    }
    fn slide_margin(&self, _index: usize) -> f32 {
        0.0
    }
    fn slide_left(&self, index: usize) -> f32 {
        index as f32 * 360.0
    }
}

fn pump(carousel: &mut Carousel<Strip>, now: &mut i64) {
    // 16 ms frames, the cadence a display host would deliver.
    while carousel.tick(*now) == TickResult::Continue {
        *now += 16;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = CarouselConfig {
        alignment: Alignment::Start,
        ..CarouselConfig::default()
    };
    let mut carousel = Carousel::new(Strip, config, |offset| {
        log::debug!("apply transform translateX({offset:.1}px)");
    })?;
    for kind in EventKind::ALL {
        carousel.subscribe(kind, |event| println!("  event: {event:?}"));
    }

    let mut now: i64 = 0;

    println!("flick left, 288 px in 96 ms (-3 px/ms):");
    carousel.handle_pointer(PointerSample::new(PointerPhase::Down, 340.0, 60.0, now));
    for step in 1..=6 {
        now += 16;
        let x = 340.0 - 48.0 * step as f32;
        carousel.handle_pointer(PointerSample::new(PointerPhase::Move, x, 60.0, now));
    }
    carousel.handle_pointer(PointerSample::new(PointerPhase::Up, 52.0, 60.0, now));
    pump(&mut carousel, &mut now);
    println!(
        "  rest: slide {} at {:.0} px\n",
        carousel.current_index(),
        carousel.offset()
    );

    println!("snap_to(0):");
    carousel.snap_to(0, now);
    pump(&mut carousel, &mut now);
    println!(
        "  rest: slide {} at {:.0} px\n",
        carousel.current_index(),
        carousel.offset()
    );

    println!("drag 120 px past the first slide and let go:");
    carousel.handle_pointer(PointerSample::new(PointerPhase::Down, 100.0, 60.0, now));
    now += 100;
    carousel.handle_pointer(PointerSample::new(PointerPhase::Move, 220.0, 60.0, now));
    println!("  resisted offset while held: {:.1} px", carousel.offset());
    // Hold still so the release velocity reads as a standstill.
    now += 300;
    carousel.handle_pointer(PointerSample::new(PointerPhase::Move, 220.0, 60.0, now));
    now += 300;
    carousel.handle_pointer(PointerSample::new(PointerPhase::Move, 220.0, 60.0, now));
    carousel.handle_pointer(PointerSample::new(PointerPhase::Up, 220.0, 60.0, now));
    pump(&mut carousel, &mut now);
    println!(
        "  rest: slide {} at {:.0} px",
        carousel.current_index(),
        carousel.offset()
    );

    Ok(())
}

//! Touch-driven horizontal carousel core.
//!
//! The carousel is host-agnostic: the host supplies slide geometry through
//! [`SlideGeometry`], feeds raw pointer samples into
//! [`Carousel::handle_pointer`], and drives animation by calling
//! [`Carousel::tick`] once per display frame until it answers
//! [`TickResult::Halt`](whirl_core::TickResult::Halt). Track offsets flow
//! back out through the offset applier, and everything observable is
//! published on a typed event bus.

pub mod boundary;
pub mod carousel;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod snap;

pub use boundary::EdgeResponse;
pub use carousel::{Carousel, InputReaction};
pub use config::CarouselConfig;
pub use engine::{MotionEngine, MotionPhase};
pub use error::CarouselError;
pub use events::{CarouselEvent, EventKind};
pub use geometry::{Alignment, Bounds, SlideGeometry, SlideGrid};
pub use snap::{SnapMode, SnapTarget};

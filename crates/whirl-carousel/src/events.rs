//! Observable carousel events.

/// Payloads published by a carousel instance. Offsets are track offsets in
/// px, deltas the change since the previous notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// A gesture locked horizontal and the carousel took ownership.
    DragStart,
    /// The finger lifted (or the platform cancelled the gesture).
    DragEnd,
    /// The track offset changed, by drag or by animation.
    Move { offset: f32, delta: f32 },
    /// All motion came to rest.
    Stop { offset: f32 },
    /// A snap or programmatic move toward `target_index` started.
    SnapStart { target_index: usize },
    /// The resting slide changed.
    SlideChange { index: usize, previous_index: usize },
    /// The last slide's leading edge entered the container.
    LastSlideVisibleStart,
    /// The last slide became fully visible.
    LastSlideVisibleFull,
}

/// Subscription key for [`CarouselEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DragStart,
    DragEnd,
    Move,
    Stop,
    SnapStart,
    SlideChange,
    LastSlideVisibleStart,
    LastSlideVisibleFull,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::DragStart,
        EventKind::DragEnd,
        EventKind::Move,
        EventKind::Stop,
        EventKind::SnapStart,
        EventKind::SlideChange,
        EventKind::LastSlideVisibleStart,
        EventKind::LastSlideVisibleFull,
    ];
}

impl CarouselEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            CarouselEvent::DragStart => EventKind::DragStart,
            CarouselEvent::DragEnd => EventKind::DragEnd,
            CarouselEvent::Move { .. } => EventKind::Move,
            CarouselEvent::Stop { .. } => EventKind::Stop,
            CarouselEvent::SnapStart { .. } => EventKind::SnapStart,
            CarouselEvent::SlideChange { .. } => EventKind::SlideChange,
            CarouselEvent::LastSlideVisibleStart => EventKind::LastSlideVisibleStart,
            CarouselEvent::LastSlideVisibleFull => EventKind::LastSlideVisibleFull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_maps_to_its_kind() {
        let events = [
            CarouselEvent::DragStart,
            CarouselEvent::DragEnd,
            CarouselEvent::Move { offset: 0.0, delta: 0.0 },
            CarouselEvent::Stop { offset: 0.0 },
            CarouselEvent::SnapStart { target_index: 0 },
            CarouselEvent::SlideChange { index: 1, previous_index: 0 },
            CarouselEvent::LastSlideVisibleStart,
            CarouselEvent::LastSlideVisibleFull,
        ];
        for (event, kind) in events.iter().zip(EventKind::ALL) {
            assert_eq!(event.kind(), kind);
        }
    }
}

//! Snap target selection.

use crate::geometry::{Bounds, SlideGrid};

/// Strategy for picking the snap target on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapMode {
    /// Project the release position forward by the velocity lookahead and
    /// take the nearest grid entry to the projection. A fast flick can jump
    /// several slides because the projection lands far away.
    Projected,
    /// Like `Projected`, but a release faster than `velocity_threshold`
    /// (px/ms) always moves to exactly the adjacent slide in the flick
    /// direction, overriding the nearest-distance result. Guarantees a
    /// transition on a decisive flick, never a multi-slide jump.
    ForcedAdjacent { velocity_threshold: f32 },
}

/// A chosen snap destination: slide index plus its bounds-clamped offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub index: usize,
    pub offset: f32,
}

/// Nearest grid entry to `search`, clamped into the bounds.
///
/// Linear scan; first entry wins ties. `None` only for an empty grid.
pub fn nearest(grid: &SlideGrid, bounds: Bounds, search: f32) -> Option<SnapTarget> {
    let offsets = grid.offsets();
    let mut best: Option<(usize, f32)> = None;
    for (index, &offset) in offsets.iter().enumerate() {
        let distance = (search - offset).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| SnapTarget {
        index,
        offset: bounds.clamp(grid.offset(index)),
    })
}

/// Pick the release snap target.
///
/// `velocity` is the release velocity in px/ms and `lookahead_ms` how far
/// to project it; a standstill release degenerates to plain nearest.
pub fn select(
    grid: &SlideGrid,
    bounds: Bounds,
    mode: SnapMode,
    current_index: usize,
    position: f32,
    velocity: f32,
    lookahead_ms: f32,
) -> Option<SnapTarget> {
    if grid.is_empty() {
        return None;
    }

    if let SnapMode::ForcedAdjacent { velocity_threshold } = mode {
        if velocity.abs() >= velocity_threshold {
            // Negative velocity moves the track left, revealing the next
            // (higher-index) slide.
            let index = if velocity < 0.0 {
                (current_index + 1).min(grid.len() - 1)
            } else {
                current_index.saturating_sub(1)
            };
            return Some(SnapTarget {
                index,
                offset: bounds.clamp(grid.offset(index)),
            });
        }
    }

    nearest(grid, bounds, position + velocity * lookahead_ms)
}

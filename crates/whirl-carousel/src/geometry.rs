//! Slide geometry: the provider seam, the slide grid, and track bounds.

/// Host-supplied slide geometry.
///
/// The carousel never touches layout itself; the host (a DOM adapter, a UI
/// toolkit node, or a test fixture) answers these queries. All values are
/// logical pixels. Queries are assumed cheap; the carousel reads them only
/// when rebuilding the grid and when deriving last-slide visibility.
pub trait SlideGeometry {
    fn container_width(&self) -> f32;
    fn slide_count(&self) -> usize;
    fn slide_width(&self, index: usize) -> f32;
    /// Margin trailing the slide on its right side.
    fn slide_margin(&self, index: usize) -> f32;
    /// Static (untransformed) left edge of the slide relative to the track.
    fn slide_left(&self, index: usize) -> f32;
}

/// How slides rest relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Each slide rests centered in the container.
    Center,
    /// Each slide rests with its left edge on the container's left edge.
    Start,
}

/// Allowed range of the track offset.
///
/// `min` is the rightmost (least negative) offset, `max` the leftmost
/// (most negative): `min >= max` numerically. The naming follows the drag
/// direction, not the magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds { min: 0.0, max: 0.0 };

    pub fn contains(&self, offset: f32) -> bool {
        offset <= self.min && offset >= self.max
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.min(self.min).max(self.max)
    }

    /// The bound an out-of-bounds offset has crossed, if any.
    pub fn violated(&self, offset: f32) -> Option<f32> {
        if offset > self.min {
            Some(self.min)
        } else if offset < self.max {
            Some(self.max)
        } else {
            None
        }
    }
}

/// Precomputed resting offsets, one per slide, index-aligned with slide
/// order. Rebuilt atomically from the geometry provider; never patched
/// incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideGrid {
    offsets: Vec<f32>,
}

impl SlideGrid {
    pub fn empty() -> Self {
        Self {
            offsets: Vec::new(),
        }
    }

    /// Build the grid under `alignment`.
    pub fn build(geometry: &dyn SlideGeometry, alignment: Alignment) -> Self {
        let count = geometry.slide_count();
        let container = geometry.container_width();
        let mut offsets = Vec::with_capacity(count);
        for index in 0..count {
            let offset = match alignment {
                Alignment::Center => {
                    (container - geometry.slide_width(index)) / 2.0 - geometry.slide_left(index)
                }
                Alignment::Start => -geometry.slide_left(index),
            };
            offsets.push(offset);
        }
        log::trace!("slide grid rebuilt: {offsets:?}");
        Self { offsets }
    }

    /// Derive the track bounds matching this grid.
    pub fn bounds(&self, geometry: &dyn SlideGeometry, alignment: Alignment) -> Bounds {
        if self.offsets.is_empty() {
            return Bounds::ZERO;
        }
        match alignment {
            Alignment::Center => Bounds {
                min: self.offsets[0],
                max: self.offsets[self.offsets.len() - 1],
            },
            Alignment::Start => {
                let last = self.offsets.len() - 1;
                let content = geometry.slide_left(last)
                    + geometry.slide_width(last)
                    + geometry.slide_margin(last);
                Bounds {
                    min: 0.0,
                    max: (geometry.container_width() - content).min(0.0),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Resting offset of `index`, or the identity offset for an empty grid.
    pub fn offset(&self, index: usize) -> f32 {
        self.offsets.get(index).copied().unwrap_or(0.0)
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equal-width slides laid out left to right with a fixed margin.
    pub(crate) struct UniformSlides {
        pub container: f32,
        pub count: usize,
        pub width: f32,
        pub margin: f32,
    }

    impl SlideGeometry for UniformSlides {
        fn container_width(&self) -> f32 {
            self.container
        }
        fn slide_count(&self) -> usize {
            self.count
        }
        fn slide_width(&self, _index: usize) -> f32 {
            self.width
        }
        fn slide_margin(&self, _index: usize) -> f32 {
            self.margin
        }
        fn slide_left(&self, index: usize) -> f32 {
            index as f32 * (self.width + self.margin)
        }
    }

    #[test]
    fn leading_edge_grid_matches_the_reference_scenario() {
        // 3 slides of 300 px in a 300 px container.
        let geometry = UniformSlides {
            container: 300.0,
            count: 3,
            width: 300.0,
            margin: 0.0,
        };
        let grid = SlideGrid::build(&geometry, Alignment::Start);
        assert_eq!(grid.offsets(), &[0.0, -300.0, -600.0]);

        let bounds = grid.bounds(&geometry, Alignment::Start);
        assert_eq!(bounds, Bounds { min: 0.0, max: -600.0 });
    }

    #[test]
    fn leading_edge_grid_is_monotonically_non_increasing() {
        let geometry = UniformSlides {
            container: 400.0,
            count: 5,
            width: 180.0,
            margin: 12.0,
        };
        let grid = SlideGrid::build(&geometry, Alignment::Start);
        for pair in grid.offsets().windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn centered_grid_centers_each_slide() {
        let geometry = UniformSlides {
            container: 500.0,
            count: 3,
            width: 300.0,
            margin: 0.0,
        };
        let grid = SlideGrid::build(&geometry, Alignment::Center);
        // Slide 0 centered: left offset 0, so translate (500-300)/2 = 100.
        assert_eq!(grid.offsets(), &[100.0, -200.0, -500.0]);

        let bounds = grid.bounds(&geometry, Alignment::Center);
        assert_eq!(bounds, Bounds { min: 100.0, max: -500.0 });
        assert!(bounds.min >= bounds.max);
    }

    #[test]
    fn content_narrower_than_container_cannot_scroll() {
        let geometry = UniformSlides {
            container: 1000.0,
            count: 2,
            width: 200.0,
            margin: 0.0,
        };
        let grid = SlideGrid::build(&geometry, Alignment::Start);
        let bounds = grid.bounds(&geometry, Alignment::Start);
        assert_eq!(bounds, Bounds::ZERO);
    }

    #[test]
    fn empty_geometry_degrades_to_identity() {
        let geometry = UniformSlides {
            container: 300.0,
            count: 0,
            width: 0.0,
            margin: 0.0,
        };
        let grid = SlideGrid::build(&geometry, Alignment::Start);
        assert!(grid.is_empty());
        assert_eq!(grid.offset(0), 0.0);
        assert_eq!(grid.bounds(&geometry, Alignment::Start), Bounds::ZERO);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let geometry = UniformSlides {
            container: 320.0,
            count: 4,
            width: 280.0,
            margin: 16.0,
        };
        let first = SlideGrid::build(&geometry, Alignment::Center);
        let second = SlideGrid::build(&geometry, Alignment::Center);
        assert_eq!(first, second);
        assert_eq!(
            first.bounds(&geometry, Alignment::Center),
            second.bounds(&geometry, Alignment::Center)
        );
    }

    #[test]
    fn bounds_clamp_and_containment() {
        let bounds = Bounds { min: 0.0, max: -600.0 };
        assert!(bounds.contains(-300.0));
        assert!(!bounds.contains(40.0));
        assert_eq!(bounds.clamp(40.0), 0.0);
        assert_eq!(bounds.clamp(-620.0), -600.0);
        assert_eq!(bounds.violated(40.0), Some(0.0));
        assert_eq!(bounds.violated(-620.0), Some(-600.0));
        assert_eq!(bounds.violated(-10.0), None);
    }
}

//! Carousel construction errors.
//!
//! Construction is the only fallible operation; after a successful
//! construction every runtime anomaly degrades to a safe default instead of
//! surfacing an error.

/// Error returned by [`Carousel::new`](crate::Carousel::new).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselError {
    /// The geometry provider reported a container width that is not a
    /// positive finite number, which usually means the host element was
    /// missing or not laid out yet.
    InvalidContainer { width: f32 },
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::InvalidContainer { width } => {
                write!(f, "container width {width} is not a positive finite number")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

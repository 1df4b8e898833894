//! Carousel error types

use thiserror::Error;

/// Carousel-related errors
#[derive(Error, Debug)]
pub enum CarouselError {
    /// Navigation target outside the slide index space
    #[error("slide index {index} out of range (carousel has {slide_count} slides)")]
    SlideOutOfRange { index: usize, slide_count: usize },

    /// A carousel is already attached under this container key
    #[error("container '{0}' already has a carousel attached")]
    AlreadyAttached(String),

    /// Registry lookup with a stale or foreign id
    #[error("unknown carousel id")]
    UnknownCarousel,

    /// Manifest could not be parsed or validated
    #[error("manifest error: {0}")]
    Manifest(String),
}

/// Result type for carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;

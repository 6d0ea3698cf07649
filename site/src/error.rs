//! Error types for configuration, carousel state, image preloading and timers.

use thiserror::Error;

/// Failure to load or validate the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into [`crate::config::SiteConfig`].
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The carousel needs at least one slide.
    #[error("site configuration lists no slides")]
    NoSlides,
    /// A zero auto-advance interval would spin the timer.
    #[error("carousel.interval_ms must be greater than zero")]
    ZeroInterval,
    /// Routes are client-side paths and must be absolute.
    #[error("{field} route `{route}` must start with '/'")]
    RelativeRoute {
        /// Which configuration field held the route.
        field: String,
        /// The rejected route.
        route: String,
    },
    /// Slide at `index` has no image URL.
    #[error("slide {index} has an empty image url")]
    EmptyImage {
        /// Position of the slide in presentation order.
        index: usize,
    },
}

/// Invalid carousel construction or jump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A carousel over zero slides has no valid index.
    #[error("carousel requires at least one slide")]
    Empty,
    /// Requested index lies outside `[0, len)`.
    #[error("slide index {index} out of range for {len} slides")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides.
        len: usize,
    },
}

/// A single image failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load image {url}: {reason}")]
pub struct LoadError {
    /// URL that was requested.
    pub url: String,
    /// Loader-provided description of the failure.
    pub reason: String,
}

impl LoadError {
    /// Builds a load error for `url`.
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Aggregate preload failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreloadError {
    /// First image failure observed by the join.
    #[error(transparent)]
    Image(#[from] LoadError),
}

/// The host refused to register a recurring timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to schedule timer: {0}")]
pub struct ScheduleError(pub String);

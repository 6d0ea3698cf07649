//! Site configuration.
//!
//! The page ships with `site.toml` embedded at compile time. Missing keys
//! fall back to defaults; the parsed document is validated before use.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::preload::FailurePolicy;
use crate::types::SiteContent;

/// Built-in configuration document.
pub const BUILTIN_SITE_TOML: &str = include_str!("../site.toml");

/// Default auto-advance period.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;
/// Default slide fade duration.
pub const DEFAULT_TRANSITION_MS: u64 = 1000;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Max tracing level for the browser console (trace, debug, info, warn, error)
    pub log_level: String,
    pub carousel: CarouselSettings,
    pub content: SiteContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            carousel: CarouselSettings::default(),
            content: SiteContent::default(),
        }
    }
}

/// Carousel timing and failure handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Auto-advance period in milliseconds
    pub interval_ms: u64,
    /// Opacity transition in milliseconds
    pub transition_ms: u64,
    /// Reaction to a slide image that fails to load
    pub failure_policy: FailurePolicy,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl CarouselSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl SiteConfig {
    /// Parse and validate the embedded `site.toml`.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_SITE_TOML)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the page cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        let content = &self.content;
        if content.slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }
        for (index, slide) in content.slides.iter().enumerate() {
            if slide.image.trim().is_empty() {
                return Err(ConfigError::EmptyImage { index });
            }
            check_route(&format!("slides[{}].link", index), &slide.link)?;
        }
        if !content.consult_route.is_empty() {
            check_route("consult_route", &content.consult_route)?;
        }
        Ok(())
    }
}

fn check_route(field: &str, route: &str) -> Result<(), ConfigError> {
    if route.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigError::RelativeRoute {
            field: field.to_string(),
            route: route.to_string(),
        })
    }
}

//! # hkupgrade-site
//!
//! Leptos components and client-side state for the HK Upgrade landing page:
//! a hero image carousel, service navigation with a mobile overlay, an image
//! gallery and a contact footer.
//!
//! ## Architecture
//!
//! - [`types`] - static content (slides, services, gallery, contact)
//! - [`config`] - the embedded `site.toml` and its validation
//! - [`carousel`] - wrap-around slide index and its render projection
//! - [`menu`] - mobile overlay flag
//! - [`preload`] - join over slide image loads, readiness state
//! - [`schedule`] - recurring timers with cancel-on-drop handles
//! - [`navigation`] - programmatic route changes
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! The host-specific pieces (image loading, timers, routing) are traits
//! bundled in [`HostServices`]. The browser entry crate implements them over
//! `web_sys` and `leptos_router`; tests use the in-crate stubs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hkupgrade_site::{components::LandingPage, config::SiteConfig, HostServices};
//! use leptos::prelude::*;
//!
//! let config = SiteConfig::builtin()?;
//! view! { <LandingPage config=config host=host_services /> }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod carousel;
pub mod components;
pub mod config;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod preload;
pub mod schedule;
pub mod styles;
pub mod types;

use std::sync::Arc;

use navigation::Navigator;
use preload::ImageLoader;
use schedule::Scheduler;

/// Host implementations the page needs at runtime.
#[derive(Clone)]
pub struct HostServices {
    /// Loads slide images
    pub loader: Arc<dyn ImageLoader>,
    /// Drives the auto-advance timer
    pub scheduler: Arc<dyn Scheduler>,
    /// Performs client-side route changes
    pub navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}

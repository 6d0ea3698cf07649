//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function taking owned,
//! static content plus the reactive state it renders from.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingPage
//! ├── SiteHeader
//! │   └── MobileMenu (while the overlay is open)
//! ├── HeroCarousel
//! │   ├── PreloadStatus (loading spinner / failure notice)
//! │   └── SlideDeck
//! │       └── CallToAction (slides with show_button)
//! ├── GallerySection
//! └── SiteFooter
//! ```

mod carousel;
mod footer;
mod gallery;
mod header;
mod icons;
mod page;

pub use carousel::{CarouselView, HeroCarousel, PreloadStatus, SlideDeck};
pub use footer::SiteFooter;
pub use gallery::GallerySection;
pub use header::SiteHeader;
pub use icons::*;
pub use page::LandingPage;

/// Install the local futures executor that component effects spawn onto.
/// The first caller wins; later calls find it already set.
#[cfg(test)]
pub(crate) fn init_test_executor() {
    let _ = any_spawner::Executor::init_futures_executor();
}

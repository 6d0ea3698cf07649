//! Landing page content types.
//!
//! Everything the page shows is static configuration. These types are:
//!
//! - **Deserializable** - loaded from `site.toml` via serde
//! - **Clone-friendly** - components take owned copies, no borrowing across views
//! - **Default-able** - tests build partial content with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use hkupgrade_site::types::{Service, Slide, SiteContent};
//!
//! let content = SiteContent {
//!     slides: vec![Slide {
//!         image: "https://cdn.example.com/hero.png".into(),
//!         link: "/vpas-details".into(),
//!         show_button: true,
//!     }],
//!     services: vec![Service {
//!         name: "DSE规划".into(),
//!         description: "DSE exam planning".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.slides.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// One entry in the hero carousel.
///
/// Order in [`SiteContent::slides`] is presentation order and decides
/// wrap-around adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image URL, preloaded before the carousel is shown
    pub image: String,
    /// Client-side route the call-to-action navigates to
    pub link: String,
    /// Whether the call-to-action button is rendered on this slide
    #[serde(default)]
    pub show_button: bool,
}

/// A named offering shown in the top navigation and the footer.
///
/// Services carry no navigation target; every entry links to `#`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Label used for navigation and quick links
    pub name: String,
    /// Long-form description
    #[serde(default)]
    pub description: String,
}

/// Company identity shown in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub logo_alt: String,
}

/// A single tile of the image gallery section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Titled grid of images rendered below the carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gallery {
    pub title: String,
    pub images: Vec<GalleryImage>,
}

/// Footer contact block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ContactInfo {
    /// `tel:` URI with whitespace and dashes stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        format!("tel:{}", digits)
    }

    /// `mailto:` URI for the contact address.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// All static content for the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: Brand,
    /// Hero carousel slides, in presentation order
    pub slides: Vec<Slide>,
    /// Services for navigation and footer quick links
    pub services: Vec<Service>,
    pub gallery: Gallery,
    pub contact: ContactInfo,
    /// Label of the header consultation button
    pub consult_label: String,
    /// Route of the header consultation button
    pub consult_route: String,
    /// Label of the per-slide call-to-action button
    pub cta_label: String,
    /// Notice replacing the carousel when a slide image fails to load
    pub load_failed_notice: String,
    /// Footer heading above the contact block
    pub contact_title: String,
    /// Footer heading above the quick links
    pub quick_links_title: String,
}

/// A projected navigation link.
///
/// Built from a [`Service`] by [`nav_entries`]; shared by the desktop
/// navigation, the mobile overlay and the footer quick links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: &'static str,
}

/// Placeholder target for service links.
pub const PLACEHOLDER_HREF: &str = "#";

/// Project the service list into navigation links, preserving order.
pub fn nav_entries(services: &[Service]) -> Vec<NavEntry> {
    services
        .iter()
        .map(|service| NavEntry {
            label: service.name.clone(),
            href: PLACEHOLDER_HREF,
        })
        .collect()
}

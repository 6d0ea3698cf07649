//! CSS styles for the landing page.
//!
//! The browser entry crate injects [`SITE_CSS`] in a `<style>` element
//! next to the page.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use hkupgrade_site::styles::SITE_CSS;
//!
//! let my_css = ".brand-name { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains(".hero-carousel"));
//! ```
//!
//! Slide opacity and its fade duration are inline styles computed from the
//! carousel settings, not part of this sheet.

/// Complete CSS for the page - light theme, mobile-first.
pub const SITE_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-card: #ffffff;
    --bg-footer: #111827;
    --text-strong: #1f2937;
    --text-body: #4b5563;
    --text-inverse: #ffffff;
    --text-footer: #d1d5db;
    --primary: #1d4ed8;
    --primary-hover: #1e40af;
    --border: #e5e7eb;
    --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg-page);
    color: var(--text-body);
    font-family: system-ui, -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif;
}

a {
    color: inherit;
    text-decoration: none;
}

.page {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.page-main {
    flex: 1;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

.btn {
    display: inline-flex;
    align-items: center;
    padding: 8px 16px;
    border-radius: 6px;
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
}

.btn-primary {
    background: var(--primary);
    color: var(--text-inverse);
}

.btn-primary:hover {
    background: var(--primary-hover);
}

/* Header */

.site-header {
    position: relative;
    height: 80px;
    display: flex;
    align-items: center;
    background: var(--bg-card);
    border-bottom: 1px solid var(--border);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.header-inner {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.brand-name {
    font-size: 20px;
    font-weight: 700;
    color: var(--text-strong);
}

.brand-tagline {
    margin: 0;
    font-size: 14px;
}

.desktop-nav {
    display: none;
    gap: 24px;
}

.nav-link,
.mobile-link {
    font-size: 14px;
    font-weight: 500;
    transition: color 0.2s;
}

.nav-link:hover,
.mobile-link:hover {
    color: var(--primary);
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 16px;
}

.consult-btn {
    display: none;
}

.menu-toggle {
    padding: 8px;
    background: transparent;
    border: none;
    cursor: pointer;
}

.mobile-menu {
    position: absolute;
    top: 80px;
    left: 0;
    width: 100%;
    z-index: 50;
    background: var(--bg-card);
    box-shadow: var(--shadow);
}

.mobile-nav {
    display: flex;
    flex-direction: column;
    padding: 16px;
}

.mobile-link {
    padding: 8px 0;
}

/* Hero carousel */

.hero-carousel {
    position: relative;
    width: 100%;
    height: 800px;
    overflow: hidden;
}

.slide-layer {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
}

.slide-image {
    width: 100%;
    height: 100%;
    object-fit: contain;
}

.slide-cta {
    position: absolute;
    bottom: 32px;
    left: 50%;
    transform: translateX(-50%);
    z-index: 10;
}

.btn-cta {
    background: rgba(255, 255, 255, 0.5);
    color: var(--primary);
    box-shadow: var(--shadow);
    transition: all 0.2s ease-in-out;
}

.btn-cta:hover {
    background: rgba(255, 255, 255, 0.75);
}

.carousel-control {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    z-index: 20;
    display: flex;
    padding: 8px;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: rgba(255, 255, 255, 0.5);
    cursor: pointer;
}

.carousel-control:hover {
    background: rgba(255, 255, 255, 0.75);
}

.carousel-control.prev {
    left: 16px;
}

.carousel-control.next {
    right: 16px;
}

.carousel-dots {
    position: absolute;
    bottom: 12px;
    left: 50%;
    transform: translateX(-50%);
    z-index: 20;
    display: flex;
    gap: 8px;
}

.dot {
    width: 10px;
    height: 10px;
    padding: 0;
    border: none;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.5);
    cursor: pointer;
}

.dot.active {
    background: var(--primary);
}

.carousel-loading,
.carousel-error {
    width: 100%;
    height: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.spinner {
    width: 128px;
    height: 128px;
    border-radius: 50%;
    border-bottom: 2px solid var(--primary);
    animation: spin 1s linear infinite;
}

.carousel-error-detail {
    font-size: 12px;
    color: #9ca3af;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Gallery */

.gallery {
    padding: 48px 0;
    background: var(--bg-card);
}

.section-title {
    margin: 0 0 48px;
    text-align: center;
    font-size: 30px;
    font-weight: 700;
    color: var(--text-strong);
}

.gallery-grid {
    display: grid;
    gap: 24px;
    grid-template-columns: 1fr;
}

.gallery-tile {
    background: var(--bg-card);
    box-shadow: var(--shadow);
    transition: box-shadow 0.2s;
}

.gallery-tile img {
    width: 100%;
    height: auto;
    object-fit: cover;
}

/* Footer */

.site-footer {
    padding: 48px 0;
    background: var(--bg-footer);
    color: var(--text-inverse);
}

.footer-grid {
    display: grid;
    gap: 32px;
    grid-template-columns: 1fr;
}

.footer-heading {
    margin: 0 0 16px;
    font-size: 20px;
    font-weight: 700;
}

.contact-line {
    display: flex;
    align-items: center;
    gap: 8px;
    margin: 8px 0;
}

.quick-links {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 8px;
}

.quick-link {
    color: var(--text-footer);
    transition: color 0.2s;
}

.quick-link:hover {
    color: var(--text-inverse);
}

@media (min-width: 640px) {
    .gallery-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 768px) {
    .consult-btn {
        display: inline-flex;
    }

    .hero-carousel {
        height: 900px;
    }

    .gallery {
        padding: 96px 0;
    }

    .footer-grid {
        grid-template-columns: 1fr 1fr;
    }
}

@media (min-width: 1024px) {
    .desktop-nav {
        display: flex;
    }

    .menu-toggle,
    .mobile-menu {
        display: none;
    }

    .hero-carousel {
        height: 1000px;
    }

    .gallery {
        padding: 128px 0;
    }

    .gallery-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

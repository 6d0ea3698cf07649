//! The landing page composition.

use leptos::prelude::*;
use tracing::warn;

use super::{CarouselView, GallerySection, HeroCarousel, SiteFooter, SiteHeader};
use crate::config::SiteConfig;
use crate::menu::MenuState;
use crate::HostServices;

/// Header, hero carousel, gallery and footer.
///
/// The page instance owns its view state (slide index, readiness, menu flag);
/// it is created on mount and discarded with the page.
#[component]
pub fn LandingPage(config: SiteConfig, host: HostServices) -> impl IntoView {
    let SiteConfig {
        carousel, content, ..
    } = config;
    let menu = RwSignal::new(MenuState::default());

    let hero = match CarouselView::new(content.slides.len()) {
        Ok(view_state) => view! {
            <HeroCarousel
                slides=content.slides
                settings=carousel
                cta_label=content.cta_label
                failure_notice=content.load_failed_notice
                view_state=view_state
                host=host
            />
        }
        .into_any(),
        Err(err) => {
            warn!(%err, "hero carousel skipped");
            view! { "" }.into_any()
        }
    };

    view! {
        <div class="page">
            <SiteHeader
                brand=content.brand
                services=content.services.clone()
                consult_label=content.consult_label
                consult_route=content.consult_route
                menu=menu
            />
            <main class="page-main">
                {hero}
                <GallerySection gallery=content.gallery />
            </main>
            <SiteFooter
                contact=content.contact
                services=content.services
                contact_title=content.contact_title
                quick_links_title=content.quick_links_title
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::navigation::RecordingNavigator;
    use crate::preload::ImageLoader;
    use crate::schedule::ManualScheduler;
    use futures::future::{ready, LocalBoxFuture};
    use futures::FutureExt;
    use leptos::tachys::view::RenderHtml;
    use std::sync::Arc;

    struct InstantLoader;

    impl ImageLoader for InstantLoader {
        fn load(&self, _url: &str) -> LocalBoxFuture<'static, Result<(), LoadError>> {
            ready(Ok(())).boxed_local()
        }
    }

    fn host() -> HostServices {
        HostServices {
            loader: Arc::new(InstantLoader),
            scheduler: Arc::new(ManualScheduler::new()),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    #[test]
    fn builtin_page_renders_every_section() {
        crate::components::init_test_executor();
        let config = SiteConfig::builtin().unwrap();
        let html = Owner::new().with(|| view! { <LandingPage config=config host=host() /> }.to_html());

        assert!(html.contains("site-header"));
        assert!(html.contains("hero-carousel"));
        assert!(html.contains("VPAS项目详细介绍"));
        assert!(html.contains("site-footer"));
        // Services appear in the desktop nav and the footer quick links.
        assert_eq!(html.matches("STEM竞赛课程").count(), 2);
        // Carousel starts in the loading state before mount effects run.
        assert!(html.contains("spinner"));
    }

    #[test]
    fn page_without_slides_skips_the_carousel() {
        crate::components::init_test_executor();
        let mut config = SiteConfig::builtin().unwrap();
        config.content.slides.clear();
        let html = Owner::new().with(|| view! { <LandingPage config=config host=host() /> }.to_html());

        assert!(!html.contains("hero-carousel"));
        assert!(html.contains("site-footer"));
    }
}

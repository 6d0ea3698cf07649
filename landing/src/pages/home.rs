// Home route: the landing page wired to browser host services.
use std::sync::Arc;

use hkupgrade_site::{components::LandingPage, config::SiteConfig, HostServices};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::browser::{BrowserScheduler, HtmlImageLoader, RouterNavigator};

#[component]
pub fn HomePage(config: SiteConfig) -> impl IntoView {
    // use_navigate needs the router context, so the host is built per route.
    let host = HostServices {
        loader: Arc::new(HtmlImageLoader),
        scheduler: Arc::new(BrowserScheduler),
        navigator: Arc::new(RouterNavigator::new(use_navigate())),
    };

    view! { <LandingPage config=config host=host /> }
}

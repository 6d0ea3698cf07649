// HK Upgrade landing page, browser entry point.

mod browser;
mod logging;
mod pages;

use hkupgrade_site::{config::SiteConfig, styles::SITE_CSS};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use pages::{HomePage, RoutePlaceholder};

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::builtin() {
        Ok(config) => config,
        Err(err) => {
            logging::init("error");
            tracing::error!(%err, "embedded site.toml rejected, nothing mounted");
            return;
        }
    };
    logging::init(&config.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <RoutePlaceholder /> }>
                <Route path=path!("/") view=move || view! { <HomePage config=config.clone() /> } />
            </Routes>
        </Router>
    }
}

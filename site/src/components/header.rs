//! Site header: brand, service navigation, consult button and the mobile overlay.

use leptos::prelude::*;

use super::{Icon, ICON_LIST};
use crate::menu::MenuState;
use crate::types::{nav_entries, Brand, NavEntry, Service};

#[component]
pub fn SiteHeader(
    brand: Brand,
    services: Vec<Service>,
    consult_label: String,
    consult_route: String,
    /// Mobile overlay flag, owned by the page
    menu: RwSignal<MenuState>,
) -> impl IntoView {
    let entries = nav_entries(&services);
    let overlay_entries = entries.clone();

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="/" class="brand">
                    <img class="brand-logo" src=brand.logo alt=brand.logo_alt width="50" height="50" />
                    <div class="brand-text">
                        <span class="brand-name">{brand.name}</span>
                        <p class="brand-tagline">{brand.tagline}</p>
                    </div>
                </a>

                <nav class="desktop-nav">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <a class="nav-link" href=entry.href>{entry.label}</a> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header-actions">
                    <a href=consult_route class="btn btn-primary consult-btn">{consult_label}</a>
                    <button
                        class="menu-toggle"
                        aria-label="Menu"
                        aria-expanded=move || menu.with(MenuState::is_open).to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        <Icon path=ICON_LIST />
                    </button>
                </div>
            </div>

            <Show when=move || menu.with(MenuState::is_open)>
                <MobileMenu entries=overlay_entries.clone() menu=menu />
            </Show>
        </header>
    }
}

/// Overlay panel listing the services; any selection closes it.
#[component]
fn MobileMenu(entries: Vec<NavEntry>, menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <nav class="mobile-nav">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <a
                                class="mobile-link"
                                href=entry.href
                                on:click=move |_| menu.update(MenuState::close)
                            >
                                {entry.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}

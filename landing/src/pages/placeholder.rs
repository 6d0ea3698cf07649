// Fallback for routes the landing page links to but does not render
// (service details, contact, slide targets).
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn RoutePlaceholder() -> impl IntoView {
    let location = use_location();
    tracing::debug!(path = %location.pathname.get_untracked(), "route without a page");

    view! {
        <section class="page-main">
            <div class="container">
                <h1 class="section-title">"页面建设中"</h1>
                <p>{move || location.pathname.get()}</p>
                <a href="/" class="btn btn-primary">"返回首页"</a>
            </div>
        </section>
    }
}

//! Footer with contact details and service quick links

use leptos::prelude::*;

use super::{Icon, ICON_ENVELOPE, ICON_MAP_PIN, ICON_PHONE};
use crate::types::{nav_entries, ContactInfo, Service};

#[component]
pub fn SiteFooter(
    contact: ContactInfo,
    services: Vec<Service>,
    contact_title: String,
    quick_links_title: String,
) -> impl IntoView {
    let phone_href = contact.phone_href();
    let email_href = contact.email_href();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-contact">
                    <h3 class="footer-heading">{contact_title}</h3>
                    <p class="contact-line">
                        <Icon path=ICON_MAP_PIN size="20" class="contact-icon" />
                        {contact.address}
                    </p>
                    <p class="contact-line">
                        <Icon path=ICON_PHONE size="20" class="contact-icon" />
                        <a href=phone_href>{contact.phone}</a>
                    </p>
                    <p class="contact-line">
                        <Icon path=ICON_ENVELOPE size="20" class="contact-icon" />
                        <a href=email_href>{contact.email}</a>
                    </p>
                </div>
                <div class="footer-links">
                    <h3 class="footer-heading">{quick_links_title}</h3>
                    <nav class="quick-links">
                        {nav_entries(&services)
                            .into_iter()
                            .map(|entry| view! { <a class="quick-link" href=entry.href>{entry.label}</a> })
                            .collect::<Vec<_>>()}
                    </nav>
                </div>
            </div>
        </footer>
    }
}

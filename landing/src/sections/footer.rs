use leptos::prelude::*;
use storefront_core::content::FOOTER_NOTE;

use crate::state::SiteState;

#[component]
pub fn Footer(site: SiteState) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-brand">{move || site.mode().brand()}</span>
                <p class="footer-copyright">{FOOTER_NOTE}</p>
            </div>
        </footer>
    }
}

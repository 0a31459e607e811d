use leptos::prelude::*;
use storefront_core::Section;

use crate::icons::{ICON_MENU, ICON_X, Icon};
use crate::state::SiteState;

#[component]
pub fn Nav(site: SiteState) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <span class="nav-brand">{move || site.mode().brand()}</span>

                // Desktop links
                <div class="nav-links">
                    <NavLinks site=site />
                </div>

                // Mobile menu button
                <button
                    class="nav-menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| site.toggle_menu()
                >
                    {move || {
                        if site.menu_open() {
                            view! { <Icon path=ICON_X /> }
                        } else {
                            view! { <Icon path=ICON_MENU /> }
                        }
                    }}
                </button>
            </div>

            <Show when=move || site.menu_open()>
                <div class="nav-mobile">
                    <div class="container nav-mobile-inner">
                        <NavLinks site=site />
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(site: SiteState) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class="nav-link" on:click=move |_| site.navigate(section)>
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

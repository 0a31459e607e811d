use leptos::prelude::*;

use crate::state::SiteState;

#[component]
pub fn Services(site: SiteState) -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container">
                <h2 class="section-title">{move || site.content().services_heading}</h2>
                <div class="grid grid-2">
                    {move || {
                        site.content()
                            .services
                            .iter()
                            .map(|package| {
                                view! {
                                    <div class="card service-card">
                                        <div class="service-image">
                                            <span>{package.tag}</span>
                                        </div>
                                        <div class="service-body">
                                            <h3 class="card-title">{package.title}</h3>
                                            <p class="card-text">{package.blurb}</p>
                                            <button class="btn btn-primary">{package.cta}</button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

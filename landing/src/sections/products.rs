use leptos::prelude::*;

use crate::state::SiteState;

#[component]
pub fn Products(site: SiteState) -> impl IntoView {
    view! {
        <section id="products" class="section products">
            <div class="container">
                <h2 class="section-title">{move || site.content().products_heading}</h2>
                <div class="grid grid-3">
                    {move || {
                        site.content()
                            .products
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="card product-card">
                                        <div class="card-image">
                                            <span>{card.title}</span>
                                        </div>
                                        <div class="card-body">
                                            <h3 class="card-title">{card.title}</h3>
                                            <p class="card-text">{card.blurb}</p>
                                            <div class="card-footer">
                                                <span class="price">{card.price}</span>
                                                <button class="btn btn-primary">{card.cta}</button>
                                            </div>
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

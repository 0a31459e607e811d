use leptos::prelude::*;
use storefront_core::BusinessMode;

use crate::icons::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon};
use crate::state::SiteState;

#[component]
pub fn Hero(site: SiteState) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">{move || site.content().hero.title}</h1>
                    <p class="hero-description">{move || site.content().hero.subtitle}</p>
                    <div class="hero-toggle">
                        {BusinessMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <button
                                        class=move || {
                                            if site.mode() == mode { "toggle-btn active" } else { "toggle-btn" }
                                        }
                                        on:click=move |_| site.set_mode(mode)
                                    >
                                        {mode.toggle_label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <Carousel site=site />
            </div>
        </section>
    }
}

/// Cross-fading slide stack. Every slide stays in the DOM; only the active
/// one is opaque.
#[component]
fn Carousel(site: SiteState) -> impl IntoView {
    let slides = move || {
        site.mode()
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                view! {
                    <div class=move || {
                        if site.slide() == index { "slide visible" } else { "slide" }
                    }>
                        <div class="slide-image">
                            <span>{slide.label}</span>
                        </div>
                        <div class="slide-caption">
                            <p>{slide.description}</p>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let indicators = move || {
        (0..site.mode().slides().len())
            .map(|index| {
                view! {
                    <button
                        class=move || {
                            if site.slide() == index { "indicator active" } else { "indicator" }
                        }
                        aria-label=format!("Show slide {}", index + 1)
                        on:click=move |_| site.show_slide(index)
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="carousel">
            {slides}
            <button
                class="carousel-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| site.prev_slide()
            >
                <Icon path=ICON_CHEVRON_LEFT />
            </button>
            <button
                class="carousel-arrow next"
                aria-label="Next slide"
                on:click=move |_| site.next_slide()
            >
                <Icon path=ICON_CHEVRON_RIGHT />
            </button>
            <div class="carousel-indicators">{indicators}</div>
        </div>
    }
}

use leptos::prelude::*;
use storefront_core::content::{ACHIEVEMENTS, ACHIEVEMENTS_HEADING, TESTIMONIALS, TESTIMONIALS_HEADING};

use crate::icons::{ICON_STAR, Icon};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <h2 class="section-title accent-secondary">{TESTIMONIALS_HEADING}</h2>
                <div class="grid grid-3">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="card testimonial-card">
                                    <div class="testimonial-star">
                                        <Icon path=ICON_STAR size="20" fill="white" />
                                    </div>
                                    <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <div class="testimonial-author">
                                        <p class="author-name">{t.author}</p>
                                        <p class="author-project">{t.project}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Achievements />
            </div>
        </section>
    }
}

/// Counters; the stylesheet tints them with the active mode's primary colour.
#[component]
fn Achievements() -> impl IntoView {
    view! {
        <div class="achievements">
            <h3 class="achievements-title">{ACHIEVEMENTS_HEADING}</h3>
            <div class="grid grid-4">
                {ACHIEVEMENTS
                    .iter()
                    .map(|a| {
                        view! {
                            <div class="achievement">
                                <div class="achievement-value">{a.value}</div>
                                <p>{a.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

// Storefront landing page, Leptos 0.8 CSR
// R.K. Building Materials / Raj Tent And Caterers

mod icons;
mod platform;
mod sections;
mod state;
mod telemetry;

use leptos::prelude::*;
use sections::*;
use state::SiteState;
use storefront_core::SiteConfig;
use tracing::warn;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    telemetry::init(&config.log_level);
    if let Some(e) = problem {
        warn!("{e}; using default site config");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let site = SiteState::new(&config);
    let contact = config.contact;

    view! {
        <div
            class=move || format!("page {}", site.theme().class)
            style=move || site.theme().css_vars()
        >
            <Nav site=site />
            <main>
                <Hero site=site />
                <Products site=site />
                <Services site=site />
                <Testimonials />
                <Contact info=contact />
            </main>
            <Footer site=site />
        </div>
    }
}

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use storefront_core::content::CONTACT_HEADING;
use storefront_core::{ContactDraft, ContactField, ContactInfo};
use tracing::{debug, info};

use crate::icons::{ICON_MAIL, ICON_MAP_PIN, ICON_MESSAGE_SQUARE, ICON_PHONE, Icon};

#[component]
pub fn Contact(info: ContactInfo) -> impl IntoView {
    let ContactInfo {
        address,
        phones,
        email,
    } = info;

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">{CONTACT_HEADING}</h2>
                <div class="grid grid-2">
                    <div>
                        <h3 class="contact-subtitle">"Get In Touch"</h3>
                        <ContactForm />
                    </div>
                    <div>
                        <h3 class="contact-subtitle">"Our Information"</h3>
                        <div class="contact-info">
                            <InfoRow icon=ICON_MAP_PIN title="Address">
                                <p>{address}</p>
                            </InfoRow>
                            <InfoRow icon=ICON_PHONE title="Phone">
                                {phones.into_iter().map(|phone| view! { <p>{phone}</p> }).collect_view()}
                            </InfoRow>
                            <InfoRow icon=ICON_MAIL title="Email">
                                <p>{email}</p>
                            </InfoRow>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-row">
            <div class="info-icon">
                <Icon path=icon />
            </div>
            <div>
                <h4 class="info-title">{title}</h4>
                {children()}
            </div>
        </div>
    }
}

/// Four-field form. Values are captured into a draft; there is no backend,
/// so submitting only records that a draft was filled in.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if current.is_blank() {
            debug!("empty contact form submitted");
            return;
        }
        info!(
            fields = ?current.filled(),
            "contact draft captured; no submission handler attached"
        );
    };

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| {
            let on_input = move |ev: web_sys::Event| {
                draft.update(|d| d.set(field, event_target_value(&ev)));
            };
            let value = move || draft.with(|d| d.get(field).to_string());
            let control = match field.input_type() {
                Some(kind) => view! {
                    <input
                        type=kind
                        name=field.name()
                        class="form-control"
                        on:input=on_input
                        prop:value=value
                    />
                }
                .into_any(),
                None => view! {
                    <textarea
                        rows="4"
                        name=field.name()
                        class="form-control"
                        on:input=on_input
                        prop:value=value
                    ></textarea>
                }
                .into_any(),
            };
            view! {
                <div class="form-field">
                    <label class="form-label">{field.label()}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="contact-form" on:submit=on_submit>
            {fields}
            <button type="submit" class="btn btn-primary btn-send">
                <span>"Send Message"</span>
                <Icon path=ICON_MESSAGE_SQUARE size="18" class="btn-icon" />
            </button>
        </form>
    }
}

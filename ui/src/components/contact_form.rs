use dioxus::prelude::*;
use tracing::debug;

use super::use_active_copy;
use crate::contact::{ContactForm, FieldError};

/// Contact section with the inquiry form.
///
/// The form state belongs to this component, so switching locale re-labels
/// the fields without touching what was typed. Submitting never leaves the
/// page and never sends anything.
#[component]
pub fn ContactSection() -> Element {
    let copy = &use_active_copy().contact;
    let mut form = use_signal(ContactForm::default);
    let mut field_error = use_signal(|| Option::<FieldError>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(_) => {
                debug!("contact form acknowledged; draft discarded");
                field_error.set(None);
            }
            Err(err) => {
                debug!(%err, "contact form submission blocked");
                field_error.set(Some(err));
            }
        }
    };

    let draft = form.read().draft.clone();
    let error_message = field_error().map(|err| err.message(copy));

    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section__heading", "{copy.heading}" }
            form { class: "contact", onsubmit: on_submit,
                div { class: "contact__field",
                    label { class: "contact__label", r#for: "contact-name", "{copy.name_label}" }
                    input {
                        id: "contact-name",
                        class: "contact__input",
                        name: "name",
                        autocomplete: "name",
                        required: true,
                        value: "{draft.name}",
                        oninput: move |evt| form.write().draft.name = evt.value(),
                    }
                }
                div { class: "contact__field",
                    label { class: "contact__label", r#for: "contact-email", "{copy.email_label}" }
                    input {
                        id: "contact-email",
                        class: "contact__input",
                        name: "email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: "{draft.email}",
                        oninput: move |evt| form.write().draft.email = evt.value(),
                    }
                }
                div { class: "contact__field contact__field--wide",
                    label { class: "contact__label", r#for: "contact-vehicle", "{copy.vehicle_label}" }
                    input {
                        id: "contact-vehicle",
                        class: "contact__input",
                        name: "vehicle",
                        placeholder: "{copy.vehicle_placeholder}",
                        value: "{draft.vehicle}",
                        oninput: move |evt| form.write().draft.vehicle = evt.value(),
                    }
                }
                div { class: "contact__field contact__field--wide",
                    label { class: "contact__label", r#for: "contact-message", "{copy.message_label}" }
                    textarea {
                        id: "contact-message",
                        class: "contact__input",
                        name: "message",
                        rows: "5",
                        placeholder: "{copy.message_placeholder}",
                        value: "{draft.message}",
                        oninput: move |evt| form.write().draft.message = evt.value(),
                    }
                }
                if let Some(message) = error_message {
                    p { class: "contact__error", role: "alert", "{message}" }
                }
                div {
                    button { class: "button button--primary contact__submit", r#type: "submit",
                        "{copy.submit}"
                    }
                }
            }
            ContactNotice { form }
        }
    }
}

/// The acknowledgment shown after a valid submission; at most one.
#[component]
pub fn ContactNotice(mut form: Signal<ContactForm>) -> Element {
    let copy = &use_active_copy().contact;
    let Some(text) = form.read().notice(copy) else {
        return rsx! {};
    };

    rsx! {
        div { class: "contact__notice", role: "status",
            span { "{text}" }
            button {
                class: "contact__dismiss",
                r#type: "button",
                onclick: move |_| form.write().dismiss(),
                "{copy.dismiss}"
            }
        }
    }
}

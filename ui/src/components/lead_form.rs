use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::core::lead::{FieldName, LeadForm};
use crate::t;

/// Lead-capture card: owns the [`LeadForm`] signal and feeds it from
/// [`LeadFormView`] events.
#[component]
pub fn LeadFormCard() -> Element {
    crate::i18n::init();
    let mut form = use_signal(LeadForm::new);

    rsx! {
        LeadFormView {
            form: form(),
            on_update: move |(field, value): (FieldName, String)| {
                form.with_mut(|f| f.update_field(field, value))
            },
            on_submit: move |_| match form.with_mut(LeadForm::submit) {
                Ok(ack) => tracing::info!(submissions = ack.submissions, "lead request acknowledged"),
                Err(err) => tracing::debug!("{err}"),
            },
        }
    }
}

/// Stateless rendering of a [`LeadForm`]: five required inputs, the inline
/// hint for the first missing field and the acknowledgment.
///
/// Native browser validation is switched off (`novalidate`) so the same
/// `validate` rules apply on web and desktop; the default form navigation is
/// always suppressed.
#[component]
pub fn LeadFormView(
    form: LeadForm,
    on_update: EventHandler<(FieldName, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    crate::i18n::init();
    let hint_field = form.first_missing();

    rsx! {
        section { class: "lead", id: "request",
            div { class: "card lead-card",
                h2 { class: "lead-card__title", {t!("lead-heading")} }

                form {
                    class: "lead-form",
                    novalidate: true,
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    for field in FieldName::iter() {
                        LeadInput {
                            key: "{field}",
                            field,
                            value: form.state().get(field).to_string(),
                            missing: form.is_missing(field),
                            show_hint: hint_field == Some(field),
                            oninput: move |value: String| on_update.call((field, value)),
                        }
                    }

                    button { r#type: "submit", class: "button button--primary lead-form__submit",
                        {t!("lead-submit")}
                    }
                }

                if form.is_acknowledged() {
                    p {
                        class: "lead-card__ack",
                        role: "status",
                        aria_live: "polite",
                        {t!("lead-acknowledgement")}
                    }
                }
            }
        }
    }
}

#[component]
fn LeadInput(
    field: FieldName,
    value: String,
    missing: bool,
    show_hint: bool,
    oninput: EventHandler<String>,
) -> Element {
    let id = format!("lead-{field}");
    let hint_id = format!("{id}-hint");
    let placeholder = placeholder(field);
    let wrapper_class = if missing {
        "lead-form__field lead-form__field--missing"
    } else {
        "lead-form__field"
    };
    let invalid = if missing { "true" } else { "false" };
    let described_by = show_hint.then(|| hint_id.clone());
    let input_type = match field {
        FieldName::Email => "email",
        FieldName::Phone => "tel",
        _ => "text",
    };

    rsx! {
        div { class: wrapper_class,
            label { class: "visually-hidden", r#for: "{id}", "{placeholder}" }
            input {
                id: "{id}",
                class: "lead-form__input",
                name: field.as_str(),
                r#type: input_type,
                placeholder: "{placeholder}",
                required: true,
                value: "{value}",
                aria_invalid: invalid,
                aria_describedby: described_by,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if show_hint {
                p { id: "{hint_id}", class: "lead-form__hint", role: "alert",
                    {t!("lead-required-hint")}
                }
            }
        }
    }
}

fn placeholder(field: FieldName) -> String {
    match field {
        FieldName::Company => t!("lead-placeholder-company"),
        FieldName::Name => t!("lead-placeholder-name"),
        FieldName::Phone => t!("lead-placeholder-phone"),
        FieldName::Email => t!("lead-placeholder-email"),
        FieldName::Requirement => t!("lead-placeholder-requirement"),
    }
}

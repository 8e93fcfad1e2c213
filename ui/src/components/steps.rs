use dioxus::prelude::*;

use crate::core::content::{step_number, Step, STEPS};
use crate::t;

use super::reveal::use_reveal_on_scroll;

/// Stagger between neighbouring cards' entrance transitions.
const REVEAL_STAGGER_MS: usize = 120;

/// "How We Help Companies": the four onboarding steps in authored order.
#[component]
pub fn StepsSection() -> Element {
    crate::i18n::init();
    let reveals = use_reveal_on_scroll(STEPS.len());
    let tracker = reveals();

    rsx! {
        section { class: "steps", id: "how-it-works",
            h2 { class: "steps__heading", {t!("steps-heading")} }
            div { class: "steps__grid",
                for (index, step) in STEPS.iter().enumerate() {
                    StepCard {
                        key: "{index}",
                        index,
                        step: *step,
                        modifier: tracker.css_class(index),
                    }
                }
            }
        }
    }
}

#[component]
fn StepCard(index: usize, step: Step, modifier: &'static str) -> Element {
    let delay_ms = index * REVEAL_STAGGER_MS;
    let label = t!("step-label", number = step_number(index));

    rsx! {
        article {
            class: "card step-card {modifier}",
            style: "transition-delay: {delay_ms}ms;",
            "data-reveal-index": "{index}",
            img {
                class: "step-card__image",
                src: step.image,
                alt: step.title,
                "loading": "lazy",
            }
            div { class: "step-card__body",
                span { class: "step-card__label", "{label}" }
                h3 { class: "step-card__title", {step.title} }
                p { class: "step-card__description", {step.description} }
            }
        }
    }
}

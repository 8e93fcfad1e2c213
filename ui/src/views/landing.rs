use dioxus::prelude::*;

use crate::components::{Footer, Hero, LeadFormCard, QuoteTicker, StepsSection};

/// The whole site: hero, steps, quote strip, lead form and footer, top to bottom.
#[component]
pub fn Landing() -> Element {
    crate::i18n::init();

    rsx! {
        div { class: "page page-landing",
            Hero {}
            main { class: "page-landing__main",
                StepsSection {}
                QuoteTicker {}
                LeadFormCard {}
            }
            Footer {}
        }
    }
}

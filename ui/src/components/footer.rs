use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Footer() -> Element {
    crate::i18n::init();

    rsx! {
        footer { class: "footer",
            p { {t!("footer-copyright")} }
        }
    }
}

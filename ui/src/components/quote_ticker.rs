use dioxus::prelude::*;

use crate::core::content::QUOTES;
use crate::core::motion::ticker_style;
use crate::t;

/// Horizontally scrolling strip with one pass of the quotes per render.
///
/// Motion is pure CSS (`.quotes__track`); the stylesheet pauses it under
/// `prefers-reduced-motion`.
#[component]
pub fn QuoteTicker() -> Element {
    crate::i18n::init();

    rsx! {
        section { class: "quotes", aria_label: t!("quotes-label"),
            div { class: "quotes__track", style: ticker_style(),
                for (index, quote) in QUOTES.iter().enumerate() {
                    span { key: "{index}", class: "quotes__item", {*quote} }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::content::HERO;
use crate::t;

/// Full-width banner: background photo under a dark overlay, title and tagline.
#[component]
pub fn Hero() -> Element {
    crate::i18n::init();

    rsx! {
        section { class: "hero",
            img {
                class: "hero__image",
                src: HERO.background,
                alt: t!("hero-image-alt"),
            }
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { class: "hero__title", {HERO.title} }
                p { class: "hero__tagline", {HERO.tagline} }
            }
        }
    }
}

//! Shared UI crate for the Corporate Food Vendor Finder site. Content, form
//! logic, components and the theme live here; `web` and `desktop` only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod footer;
    mod hero;
    mod lead_form;
    mod quote_ticker;
    mod reveal;
    mod steps;

    pub use footer::Footer;
    pub use hero::Hero;
    pub use lead_form::{LeadFormCard, LeadFormView};
    pub use quote_ticker::QuoteTicker;
    pub use reveal::use_reveal_on_scroll;
    pub use steps::StepsSection;
}

/// Shared theme (`ui/assets/theme/main.css`) as a bundled asset for the web build.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same theme embedded as text for native builds.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

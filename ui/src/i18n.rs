//! Message catalog for `vendorfinder-ui`.
//!
//! Page chrome (headings, placeholders, button labels, the acknowledgment and
//! the validation hint) is looked up through a Fluent catalog so the copy lives
//! in one reviewable file. The content registry (`core::content`) stays in Rust.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vendorfinder_ui.ftl
//! ```
//!
//! Only `en-US` ships. There is no language picker; `init()` still asks the
//! platform requester so the fallback is selected the same way on web and
//! desktop.
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let heading = crate::t!("steps-heading");
//! let label = crate::t!("step-label", number = 2);
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic lookup macro.
/// Examples:
///     t!("lead-submit")
///     t!("step-label", number = 3)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the catalog file is `i18n/en-US/{DOMAIN}.ftl`.
///
/// `fl!` derives its compile-time domain from the package name with `-`
/// replaced by `_`, so the runtime loader must use the same spelling.
const DOMAIN: &str = "vendorfinder_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Shared loader behind `t!`.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the catalog (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "message catalog loaded"),
            Err(err) => {
                tracing::warn!("failed selecting catalog languages ({err}); continuing with fallback")
            }
        }
        // Applies to the bundles loaded above: plain text, no bidi isolation
        // marks around placeables.
        LOADER.set_use_isolating(false);
    });
}

/// Embedded catalog language tags.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_fallback_catalog_ships() {
        assert_eq!(available_languages(), vec!["en-US".to_string()]);
    }

    #[test]
    fn acknowledgement_copy() {
        init();
        assert_eq!(
            crate::t!("lead-acknowledgement"),
            "Request Submitted Successfully. Our team will contact you."
        );
    }

    #[test]
    fn step_label_interpolates_number() {
        init();
        assert_eq!(crate::t!("step-label", number = 3), "Step 3");
    }
}

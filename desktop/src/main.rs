#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::views::Landing;

const MAIN_CSS_INLINE: &str = ui::THEME_CSS_INLINE;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!(
                        "Corporate Food Vendor Finder – v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .with_inner_size(LogicalSize::new(1280.0, 900.0)),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        ui::i18n::init();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "vendor finder desktop starting");
    });

    rsx! {
        // Always inline the shared theme; native builds have no separate asset directory.
        document::Style { "{MAIN_CSS_INLINE}" }

        Landing {}
    }
}

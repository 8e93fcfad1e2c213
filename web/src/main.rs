use dioxus::prelude::*;

use ui::views::Landing;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| {
        ui::i18n::init();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "vendor finder web starting");
    });

    rsx! {
        // Global app resources
        document::Title { "Corporate Food Vendor Finder" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Landing {}
    }
}

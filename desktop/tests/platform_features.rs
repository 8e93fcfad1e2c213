#![cfg(test)]
//! The site has no backend: the platform shells only launch a renderer.
//! Guards against a server launch path creeping back into either manifest.

const DESKTOP_MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
const WEB_MANIFEST: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/Cargo.toml"));
const DESKTOP_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

#[test]
fn shells_only_enable_their_renderer() {
    assert!(DESKTOP_MANIFEST.contains(r#"desktop = ["dioxus/desktop"]"#));
    assert!(WEB_MANIFEST.contains(r#"web = ["dioxus/web"]"#));
    for (name, manifest) in [("desktop", DESKTOP_MANIFEST), ("web", WEB_MANIFEST)] {
        for forbidden in ["dioxus/server", "dioxus/fullstack"] {
            assert!(
                !manifest.contains(forbidden),
                "{name} manifest enables `{forbidden}`"
            );
        }
    }
}

#[test]
fn desktop_has_a_single_launch_path() {
    assert_eq!(DESKTOP_MAIN.matches("fn main()").count(), 1);
    assert!(!DESKTOP_MAIN.contains("LaunchBuilder::server"));
}

//! Scroll-triggered entrance reveal for the step cards.
//!
//! An `IntersectionObserver` runs inside the host document (browser or desktop
//! webview) and reports each `[data-reveal-index]` element the first time it
//! enters the viewport. Reports land in a [`RevealTracker`] signal; the cards
//! read their modifier class from it.
//!
//! The script must answer within [`OBSERVER_HANDSHAKE_MS`], either "ready"
//! (`-2`) or "unavailable" (`-1`). After a ready handshake, silence only means
//! the user has not scrolled yet.

use dioxus::document::EvalError;
use dioxus::prelude::*;

use crate::core::motion::{RevealTracker, OBSERVER_HANDSHAKE_MS};
use crate::core::timing;

/// Sends `-2` once all cards are observed, then each card index once; sends
/// `-1` instead when the observer cannot or should not run (reduced motion,
/// missing API, no cards on the page).
const REVEAL_OBSERVER_JS: &str = r#"
const reduceMotion = window.matchMedia
    && window.matchMedia("(prefers-reduced-motion: reduce)").matches;
const cards = document.querySelectorAll("[data-reveal-index]");
if (reduceMotion || !("IntersectionObserver" in window) || cards.length === 0) {
    dioxus.send(-1);
} else {
    const observer = new IntersectionObserver((entries) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) {
                observer.unobserve(entry.target);
                dioxus.send(Number(entry.target.dataset.revealIndex));
            }
        });
    }, { threshold: 0.15 });
    cards.forEach((card) => observer.observe(card));
    dioxus.send(-2);
}
"#;

/// Track which of `count` cards have entered the viewport.
///
/// If the observer script fails or never answers the handshake every card is
/// revealed, so content never depends on animation.
pub fn use_reveal_on_scroll(count: usize) -> Signal<RevealTracker> {
    let mut tracker = use_signal(|| RevealTracker::new(count));

    use_effect(move || {
        spawn(async move {
            if let Err(err) = watch_reveals(tracker).await {
                tracing::warn!("reveal observer unavailable ({err}); showing all step cards");
                tracker.with_mut(RevealTracker::reveal_all);
            }
        });
    });

    tracker
}

async fn watch_reveals(mut tracker: Signal<RevealTracker>) -> Result<(), EvalError> {
    let mut observer = document::eval(REVEAL_OBSERVER_JS);

    let first = timing::within(observer.recv::<i64>(), OBSERVER_HANDSHAKE_MS)
        .await
        .transpose()?;
    if first.is_none() {
        tracing::warn!("reveal observer did not answer; showing all step cards");
    }
    if tracker.with_mut(|t| t.apply_handshake(first)) {
        return Ok(());
    }

    loop {
        let report: i64 = observer.recv().await?;
        tracing::debug!(report, "step card entered viewport");
        if tracker.with_mut(|t| t.apply_report(report)) {
            return Ok(());
        }
    }
}

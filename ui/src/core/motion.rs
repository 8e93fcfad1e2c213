//! Entrance-reveal bookkeeping and ticker timing for the animation layer.
//!
//! A card is revealed the first time the viewport observer reports it and never
//! goes back to pending. The observer script first reports [`OBSERVER_READY`]
//! once it is installed; [`OBSERVER_UNAVAILABLE`] (or silence past the
//! handshake timeout) means it could not run (no `IntersectionObserver`,
//! reduced motion requested, ...) and every card is revealed at once so
//! nothing stays hidden.

/// Sent by the observer script once every card is being observed.
pub const OBSERVER_READY: i64 = -2;

/// Sent by the observer script when it will not observe anything.
pub const OBSERVER_UNAVAILABLE: i64 = -1;

/// How long the script may take to report [`OBSERVER_READY`].
pub const OBSERVER_HANDSHAKE_MS: u64 = 2_000;

/// Seconds for one full pass of the quote strip.
pub const QUOTE_SCROLL_SECONDS: u32 = 20;

/// Inline style driving the quote strip's CSS animation.
pub fn ticker_style() -> String {
    format!("animation-duration: {QUOTE_SCROLL_SECONDS}s;")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Mark one card revealed. Returns `true` only on the first reveal.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) {
        self.revealed.iter_mut().for_each(|seen| *seen = true);
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|seen| *seen)
    }

    /// Apply one message from the observer script. Returns `true` once every
    /// card is revealed and the observer can be dropped.
    pub fn apply_report(&mut self, report: i64) -> bool {
        match report {
            OBSERVER_READY => {}
            _ => match usize::try_from(report) {
                Ok(index) => {
                    self.reveal(index);
                }
                Err(_) => self.reveal_all(),
            },
        }
        self.all_revealed()
    }

    /// Apply the first report, or `None` if the script stayed silent past
    /// [`OBSERVER_HANDSHAKE_MS`]. Silence reveals every card.
    pub fn apply_handshake(&mut self, first: Option<i64>) -> bool {
        match first {
            Some(report) => self.apply_report(report),
            None => {
                self.reveal_all();
                true
            }
        }
    }

    /// Modifier class for the card at `index`.
    pub fn css_class(&self, index: usize) -> &'static str {
        if self.is_revealed(index) {
            "step-card--revealed"
        } else {
            "step-card--pending"
        }
    }
}

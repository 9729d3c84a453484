//! Navigation state machine.
//!
//! The whole application has exactly one piece of mutable navigation state:
//! which screen is showing. It is modeled as an explicit tagged variant with
//! pure transition functions, so the complete navigation contract is
//! testable without rendering anything.
//!
//! Transitions: `Catalog → Detail(i)` on activation, `Detail(_) → Catalog`
//! on dismissal. Nothing else.

use tracing::{debug, warn};

/// The screen currently showing.
///
/// `Detail` carries the catalog index of the selected puppy — the transient
/// Selection. It is owned here, by the navigation layer, never by the
/// catalog or the puppy values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The catalog list.
    #[default]
    Catalog,
    /// Detail view for the catalog entry at this index.
    Detail(usize),
}

/// Why the detail screen was dismissed.
///
/// Both reasons transition identically. "Adopt me now" in the original demo
/// is a placeholder with no adoption effect — the puppy stays in the catalog
/// — and we keep that behavior on purpose, recording the distinction only in
/// the logs instead of inventing removal semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The back control.
    Back,
    /// The "Adopt me now" control.
    Adopt,
}

impl DismissReason {
    /// Short name for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Adopt => "adopt",
        }
    }
}

/// The navigation layer: owns the current [`Screen`] and applies transitions.
#[derive(Debug, Default)]
pub struct Nav {
    screen: Screen,
}

impl Nav {
    /// Start on the catalog screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently showing.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Activate the catalog entry at `index`, transitioning to its detail
    /// screen. `catalog_len` bounds the index.
    ///
    /// Returns whether the transition happened. An out-of-bounds index or an
    /// activation while a detail screen is already showing is a programming
    /// defect upstream (the cursor is clamped to the catalog), so it is
    /// logged and ignored rather than surfaced to the user.
    pub fn activate(&mut self, index: usize, catalog_len: usize) -> bool {
        if self.screen != Screen::Catalog {
            warn!(screen = ?self.screen, index, "activation ignored: not on catalog screen");
            return false;
        }
        if index >= catalog_len {
            warn!(index, catalog_len, "activation ignored: index out of bounds");
            return false;
        }
        debug!(index, "showing detail screen");
        self.screen = Screen::Detail(index);
        true
    }

    /// Dismiss the detail screen, returning to the catalog.
    ///
    /// Returns whether the transition happened.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let Screen::Detail(index) = self.screen else {
            warn!(reason = reason.as_str(), "dismiss ignored: already on catalog");
            return false;
        };
        if reason == DismissReason::Adopt {
            // Placeholder behavior carried over from the original demo.
            debug!(index, "adopt pressed; no adoption effect, puppy stays in the catalog");
        }
        debug!(index, reason = reason.as_str(), "returning to catalog");
        self.screen = Screen::Catalog;
        true
    }
}

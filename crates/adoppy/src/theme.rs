//! Semantic color tokens.
//!
//! Styling goes through named roles rather than ad-hoc colors sprinkled over
//! the views. The dark preset approximates the original demo's palette
//! (dark blue card, light gray tagline, almost-white controls). Color output
//! is globally gated by `colored`'s override, so `--no-color` and `NO_COLOR`
//! degrade every token to plain text.

use colored::{Color, Colorize};

/// Semantic color roles for the application.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// App title.
    title: Color,
    /// Tagline and secondary copy.
    tagline: Color,
    /// Selected row and interactive highlights.
    accent: Color,
    /// De-emphasized text (hints, decorations).
    muted: Color,
    /// ASCII art.
    art: Color,
    /// The adopt button.
    button: Color,
}

impl Theme {
    /// The default dark theme.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            title: Color::BrightWhite,
            tagline: Color::BrightBlack,
            accent: Color::Magenta,
            muted: Color::BrightBlack,
            art: Color::Blue,
            button: Color::Cyan,
        }
    }

    /// Render the app title.
    #[must_use]
    pub fn title(&self, text: &str) -> String {
        text.color(self.title).bold().to_string()
    }

    /// Render the tagline.
    #[must_use]
    pub fn tagline(&self, text: &str) -> String {
        text.color(self.tagline).to_string()
    }

    /// Render highlighted (selected) text.
    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        text.color(self.accent).to_string()
    }

    /// Render de-emphasized text.
    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        text.color(self.muted).to_string()
    }

    /// Render ASCII art.
    #[must_use]
    pub fn art(&self, text: &str) -> String {
        text.color(self.art).to_string()
    }

    /// Render a button label.
    #[must_use]
    pub fn button(&self, text: &str) -> String {
        text.color(self.button).bold().to_string()
    }

    /// Render a heading inside a screen (e.g. the puppy's name).
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        text.color(self.title).bold().to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

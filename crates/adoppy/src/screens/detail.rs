//! The detail screen.
//!
//! Renders every attribute of exactly one puppy and offers two controls:
//! "Adopt me now" and back. Both dismiss the screen; the reason travels in
//! the message so the router can log the placeholder adopt action, but the
//! transition is identical either way.

use teacup::{Cmd, KeyMsg, KeyType, command, quit};

use crate::assets::art_for;
use crate::messages::NavMsg;
use crate::nav::DismissReason;
use crate::puppy::Puppy;
use crate::theme::Theme;

/// Label of the activation control, verbatim from the original.
const ADOPT_LABEL: &str = "Adopt me now";

/// The detail screen model. Stateless: the selected puppy lives in the
/// navigation layer and is passed in at render time.
#[derive(Debug, Default)]
pub struct DetailScreen;

impl DetailScreen {
    /// Create the screen.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Handle a key while the detail screen is showing.
    pub fn update(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match key.key_type {
            // The adopt control.
            KeyType::Enter | KeyType::Space => {
                Some(command::emit(NavMsg::Dismissed(DismissReason::Adopt)))
            }
            // The back control.
            KeyType::Esc | KeyType::Backspace | KeyType::Left => {
                Some(command::emit(NavMsg::Dismissed(DismissReason::Back)))
            }
            KeyType::Runes => match key.rune()? {
                'h' | 'b' => Some(command::emit(NavMsg::Dismissed(DismissReason::Back))),
                'q' | 'Q' => Some(quit()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Render the detail view for the given puppy.
    #[must_use]
    pub fn view(&self, puppy: &Puppy, theme: &Theme) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!("  {}\n\n", theme.muted("← back")));

        for line in art_for(puppy.breed()).lines() {
            output.push_str(&format!("   {}\n", theme.art(line)));
        }
        output.push('\n');

        output.push_str(&format!(
            "  {}  {}\n\n",
            theme.heading(puppy.name()),
            puppy.age_label()
        ));

        output.push_str(&format!("  {}\n", theme.tagline("Breed")));
        output.push_str(&format!("  {}\n\n", puppy.breed().display_name()));

        output.push_str(&format!("  {}\n", theme.tagline("Gender")));
        output.push_str(&format!("  {}\n\n", puppy.gender().label()));

        output.push_str(&format!(
            "  {}\n",
            theme.button(&format!("[ {ADOPT_LABEL} ]"))
        ));

        output
    }

    /// Context-sensitive key hints for the footer.
    #[must_use]
    pub const fn hints(&self) -> &'static str {
        "Enter adopt  Esc back  q quit"
    }
}

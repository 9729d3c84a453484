//! The catalog (list) screen.
//!
//! Renders one row per catalog entry in catalog order and lets the user move
//! a cursor over them. Activating a row is the screen's sole side effect,
//! and even that is delegated: the screen emits [`NavMsg::Activated`] and
//! the router decides what happens.

use teacup::{Cmd, KeyMsg, KeyType, command, quit};

use crate::assets::badge_for;
use crate::messages::NavMsg;
use crate::puppy::Puppy;
use crate::theme::Theme;

/// Decorative distance tag carried over from the original list rows.
const DISTANCE_TAG: &str = "Distance 5k";

/// The list screen model. Its only state is the cursor.
#[derive(Debug, Default)]
pub struct CatalogScreen {
    cursor: usize,
}

impl CatalogScreen {
    /// Create the screen with the cursor on the first row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key while the catalog is showing. `catalog_len` bounds
    /// cursor movement and activation.
    pub fn update(&mut self, key: &KeyMsg, catalog_len: usize) -> Option<Cmd> {
        let last = catalog_len.saturating_sub(1);
        match key.key_type {
            KeyType::Runes => match key.rune()? {
                'j' => self.cursor_down(last),
                'k' => self.cursor_up(),
                'g' => self.cursor = 0,
                'G' => self.cursor = last,
                'q' | 'Q' => return Some(quit()),
                _ => {}
            },
            KeyType::Down => self.cursor_down(last),
            KeyType::Up => self.cursor_up(),
            KeyType::Home => self.cursor = 0,
            KeyType::End => self.cursor = last,
            KeyType::Enter | KeyType::Space => {
                if catalog_len > 0 {
                    return Some(command::emit(NavMsg::Activated(self.cursor)));
                }
            }
            KeyType::Esc => return Some(quit()),
            _ => {}
        }
        None
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_down(&mut self, last: usize) {
        if self.cursor < last {
            self.cursor += 1;
        }
    }

    /// Render the catalog in catalog order.
    #[must_use]
    pub fn view(&self, puppies: &[Puppy], theme: &Theme) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!("  {}\n", theme.title("Adoppy")));
        output.push_str(&format!(
            "  {}\n\n",
            theme.tagline("Give a happy place for a puppy to be")
        ));

        if puppies.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                theme.muted("No puppies in the catalog right now.")
            ));
            return output;
        }

        for (i, puppy) in puppies.iter().enumerate() {
            let marker = if i == self.cursor { "❯" } else { " " };
            let row = format!(
                "{} {}  {} · {}",
                badge_for(puppy.breed()),
                puppy.name(),
                puppy.age_label(),
                theme.muted(DISTANCE_TAG),
            );
            let row = if i == self.cursor {
                theme.accent(&row)
            } else {
                row
            };
            output.push_str(&format!("  {marker} {row}\n"));
        }

        output
    }

    /// Context-sensitive key hints for the footer.
    #[must_use]
    pub const fn hints(&self) -> &'static str {
        "j/k move  Enter view  q quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, SampleCatalog};
    use crate::puppy::{Breed, Gender};
    use proptest::prelude::*;

    fn key_char(ch: char) -> KeyMsg {
        KeyMsg::from_char(ch)
    }

    fn key_type(kt: KeyType) -> KeyMsg {
        KeyMsg::from_type(kt)
    }

    fn plain_theme() -> Theme {
        colored::control::set_override(false);
        Theme::dark()
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut screen = CatalogScreen::new();
        screen.update(&key_char('k'), 4);
        assert_eq!(screen.cursor(), 0);

        screen.update(&key_char('j'), 4);
        assert_eq!(screen.cursor(), 1);

        screen.update(&key_char('G'), 4);
        assert_eq!(screen.cursor(), 3);

        screen.update(&key_type(KeyType::Down), 4);
        assert_eq!(screen.cursor(), 3);

        screen.update(&key_type(KeyType::Home), 4);
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_enter_emits_activation_for_cursor_row() {
        let mut screen = CatalogScreen::new();
        screen.update(&key_char('j'), 4);

        let cmd = screen.update(&key_type(KeyType::Enter), 4).unwrap();
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<NavMsg>(), Some(NavMsg::Activated(1)));
    }

    #[test]
    fn test_space_also_activates() {
        let mut screen = CatalogScreen::new();
        let cmd = screen.update(&key_type(KeyType::Space), 4).unwrap();
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<NavMsg>(), Some(NavMsg::Activated(0)));
    }

    #[test]
    fn test_activation_noop_on_empty_catalog() {
        let mut screen = CatalogScreen::new();
        assert!(screen.update(&key_type(KeyType::Enter), 0).is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut screen = CatalogScreen::new();
        assert!(screen.update(&key_char('q'), 4).is_some());
        assert!(screen.update(&key_type(KeyType::Esc), 4).is_some());
    }

    #[test]
    fn test_view_shows_rows_in_catalog_order() {
        let catalog = SampleCatalog::new();
        let screen = CatalogScreen::new();
        let view = screen.view(catalog.puppies(), &plain_theme());

        let rows: Vec<&str> = view
            .lines()
            .filter(|line| line.contains(DISTANCE_TAG))
            .collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("Haru") && rows[0].contains("1 year old"));
        assert!(rows[1].contains("Boltie") && rows[1].contains("2 years old"));
        assert!(rows[2].contains("Max") && rows[2].contains("4 years old"));
        assert!(rows[3].contains("Bolt") && rows[3].contains("3 years old"));
    }

    #[test]
    fn test_view_header_and_empty_state() {
        let screen = CatalogScreen::new();
        let view = screen.view(&[], &plain_theme());
        assert!(view.contains("Adoppy"));
        assert!(view.contains("Give a happy place for a puppy to be"));
        assert!(view.contains("No puppies"));
    }

    fn arb_puppy() -> impl Strategy<Value = Puppy> {
        let names = prop::sample::select(vec!["Haru", "Boltie", "Max", "Bolt", "Rex", "Momo"]);
        let breeds = prop::sample::select(Breed::all().to_vec());
        let genders = prop::sample::select(Gender::all().to_vec());
        (names, 1u8..=15, breeds, genders)
            .prop_map(|(name, age, breed, gender)| Puppy::new(name, age, breed, gender))
    }

    proptest! {
        // Display order equals input order, for any sequence length >= 0.
        #[test]
        fn prop_view_preserves_catalog_order(puppies in prop::collection::vec(arb_puppy(), 0..12)) {
            let screen = CatalogScreen::new();
            let view = screen.view(&puppies, &plain_theme());

            let rows: Vec<&str> = view
                .lines()
                .filter(|line| line.contains(DISTANCE_TAG))
                .collect();
            prop_assert_eq!(rows.len(), puppies.len());
            for (row, puppy) in rows.iter().zip(&puppies) {
                prop_assert!(row.contains(puppy.name()));
                prop_assert!(row.contains(&puppy.age_label()));
            }
        }
    }
}

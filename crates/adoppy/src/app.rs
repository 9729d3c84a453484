//! Top-level application model and routing.
//!
//! `App` is the navigation host: it owns the [`Nav`] state machine, the
//! catalog source, and both screen models. Key messages are routed to the
//! active screen; the navigation events the screens emit come back through
//! the update loop and drive the state transition.

use teacup::{Cmd, KeyMsg, Message, Model, WindowSizeMsg};
use tracing::debug;

use crate::catalog::{CatalogSource, SampleCatalog};
use crate::messages::NavMsg;
use crate::nav::{Nav, Screen};
use crate::puppy::Puppy;
use crate::screens::{CatalogScreen, DetailScreen};
use crate::theme::Theme;

/// Main application state.
pub struct App {
    /// The data-provisioning collaborator.
    catalog: Box<dyn CatalogSource>,
    /// The navigation layer; owns the transient selection.
    nav: Nav,
    catalog_screen: CatalogScreen,
    detail_screen: DetailScreen,
    theme: Theme,
    /// Terminal height, for anchoring the footer. Zero until the first
    /// window size message arrives.
    height: usize,
}

impl App {
    /// Create the app over the shipped sample catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Box::new(SampleCatalog::new()))
    }

    /// Create the app over an arbitrary catalog source.
    #[must_use]
    pub fn with_catalog(catalog: Box<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            nav: Nav::new(),
            catalog_screen: CatalogScreen::new(),
            detail_screen: DetailScreen::new(),
            theme: Theme::dark(),
            height: 0,
        }
    }

    /// The screen currently showing.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.nav.screen()
    }

    /// The puppy the detail screen is showing, if any.
    #[must_use]
    pub fn selected_puppy(&self) -> Option<&Puppy> {
        match self.nav.screen() {
            Screen::Detail(index) => self.catalog.puppies().get(index),
            Screen::Catalog => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.height = usize::from(size.height);
            return None;
        }

        if let Some(&nav_msg) = msg.downcast_ref::<NavMsg>() {
            match nav_msg {
                NavMsg::Activated(index) => {
                    debug!(index, "row activated");
                    self.nav.activate(index, self.catalog.len());
                }
                NavMsg::Dismissed(reason) => {
                    self.nav.dismiss(reason);
                }
            }
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        match self.nav.screen() {
            Screen::Catalog => self.catalog_screen.update(key, self.catalog.len()),
            Screen::Detail(_) => self.detail_screen.update(key),
        }
    }

    fn view(&self) -> String {
        let (mut output, hints) = match self.nav.screen() {
            Screen::Catalog => (
                self.catalog_screen.view(self.catalog.puppies(), &self.theme),
                self.catalog_screen.hints(),
            ),
            Screen::Detail(index) => {
                // Nav bounds-checks on activation, so the index is valid.
                let puppy = &self.catalog.puppies()[index];
                (
                    self.detail_screen.view(puppy, &self.theme),
                    self.detail_screen.hints(),
                )
            }
        };

        // Anchor the hints to the bottom once the terminal height is known.
        let lines = output.lines().count();
        let target = self.height.saturating_sub(2);
        for _ in lines..target {
            output.push('\n');
        }
        output.push_str(&format!("\n  {}\n", self.theme.muted(hints)));
        output
    }
}

/// Render every screen headlessly, for `--self-check`.
///
/// Produces the catalog view followed by the detail view of each catalog
/// entry, so CI can validate all render paths without a TTY.
#[must_use]
pub fn self_check() -> String {
    let theme = Theme::dark();
    let catalog = SampleCatalog::new();
    let list = CatalogScreen::new();
    let detail = DetailScreen::new();

    let mut output = list.view(catalog.puppies(), &theme);
    for puppy in catalog.puppies() {
        output.push('\n');
        output.push_str(&detail.view(puppy, &theme));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixedCatalog;
    use crate::nav::DismissReason;
    use teacup::KeyType;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_starts_on_catalog_with_no_selection() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Catalog);
        assert!(app.selected_puppy().is_none());
    }

    #[test]
    fn test_activation_message_selects_puppy() {
        let mut app = App::new();
        app.update(NavMsg::Activated(2).into_message());
        assert_eq!(app.screen(), Screen::Detail(2));
        assert_eq!(app.selected_puppy().unwrap().name(), "Max");
    }

    #[test]
    fn test_dismissal_message_returns_to_catalog() {
        let mut app = App::new();
        app.update(NavMsg::Activated(0).into_message());
        app.update(NavMsg::Dismissed(DismissReason::Adopt).into_message());
        assert_eq!(app.screen(), Screen::Catalog);
        assert!(app.selected_puppy().is_none());
    }

    #[test]
    fn test_keys_route_to_active_screen() {
        plain();
        let mut app = App::new();

        // Down moves the catalog cursor; Enter emits the activation.
        app.update(Message::new(KeyMsg::from_type(KeyType::Down)));
        let cmd = app
            .update(Message::new(KeyMsg::from_type(KeyType::Enter)))
            .unwrap();
        let msg = cmd.execute().unwrap();
        assert_eq!(msg.downcast::<NavMsg>(), Some(NavMsg::Activated(1)));
    }

    #[test]
    fn test_view_follows_screen() {
        plain();
        let mut app = App::new();
        assert!(app.view().contains("Adoppy"));

        app.update(NavMsg::Activated(1).into_message());
        let view = app.view();
        assert!(view.contains("Boltie"));
        assert!(view.contains("[ Adopt me now ]"));
    }

    #[test]
    fn test_footer_anchored_by_window_size() {
        plain();
        let mut app = App::new();
        app.update(Message::new(WindowSizeMsg {
            width: 80,
            height: 30,
        }));
        let view = app.view();
        assert!(view.lines().count() >= 28);
    }

    #[test]
    fn test_empty_catalog_view_and_activation() {
        plain();
        let mut app = App::with_catalog(Box::new(FixedCatalog::default()));
        assert!(app.view().contains("No puppies"));
        assert!(
            app.update(Message::new(KeyMsg::from_type(KeyType::Enter)))
                .is_none()
        );
        assert_eq!(app.screen(), Screen::Catalog);
    }

    #[test]
    fn test_self_check_renders_every_screen() {
        plain();
        let output = self_check();
        assert!(output.contains("Adoppy"));
        for name in ["Haru", "Boltie", "Max", "Bolt"] {
            assert!(output.contains(name));
        }
        assert!(output.contains("[ Adopt me now ]"));
    }
}

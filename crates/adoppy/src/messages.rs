//! Message taxonomy for the app.
//!
//! The original demo wires its screens together with callback closures:
//! `onItemActivated(puppy)` from the list and `onDismiss()` from the detail
//! screen. Here those callbacks are messages emitted by the screen models
//! and consumed by the [`crate::app::App`] router, which owns the navigation
//! state.

use teacup::Message;

use crate::nav::DismissReason;

/// Navigation events raised by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    /// A catalog row was activated; carries the catalog index.
    Activated(usize),
    /// The detail screen was dismissed, from either of its two controls.
    Dismissed(DismissReason),
}

impl NavMsg {
    /// Wrap this into a teacup [`Message`].
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_msg_round_trips_through_message() {
        let msg = NavMsg::Activated(2).into_message();
        assert_eq!(msg.downcast::<NavMsg>(), Some(NavMsg::Activated(2)));

        let msg = NavMsg::Dismissed(DismissReason::Adopt).into_message();
        assert_eq!(
            msg.downcast::<NavMsg>(),
            Some(NavMsg::Dismissed(DismissReason::Adopt))
        );
    }
}

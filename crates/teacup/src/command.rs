//! Commands: deferred work returned from `init` and `update`.
//!
//! A command is a thunk that may produce a follow-up message. In keeping
//! with teacup's synchronous design, commands are executed inline by the
//! event loop immediately after the update that returned them; the message
//! they produce is queued behind any input already waiting.

use crate::message::{Message, QuitMsg};

/// A deferred unit of work that may produce a message.
pub struct Cmd(Box<dyn FnOnce() -> Option<Message>>);

impl Cmd {
    /// Create a command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + 'static,
    {
        Self(Box::new(f))
    }

    /// Execute the command, producing its message (if any).
    #[must_use]
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// A command that quits the program.
#[must_use]
pub fn quit() -> Cmd {
    Cmd::new(|| Some(Message::new(QuitMsg)))
}

/// A command that simply emits the given message.
///
/// Useful for models that want to hand a message up to their router.
#[must_use]
pub fn emit<M: 'static>(msg: M) -> Cmd {
    Cmd::new(move || Some(Message::new(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_produces_quit_msg() {
        let msg = quit().execute().unwrap();
        assert!(msg.is::<QuitMsg>());
    }

    #[test]
    fn test_emit_carries_payload() {
        struct Ping(u8);
        let msg = emit(Ping(7)).execute().unwrap();
        assert_eq!(msg.downcast::<Ping>().unwrap().0, 7);
    }

    #[test]
    fn test_custom_command_can_be_silent() {
        let cmd = Cmd::new(|| None);
        assert!(cmd.execute().is_none());
    }
}

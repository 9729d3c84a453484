//! Keyboard input handling.
//!
//! This module provides types for representing keyboard events. The set of
//! recognized keys is intentionally small: character input plus the
//! navigation and editing keys a screen-oriented program actually reacts to.
//! Anything else is dropped at the translation boundary rather than carried
//! around as an "unknown" variant.

use std::fmt;

/// Keyboard key event message.
///
/// `KeyMsg` is sent to the program's update function when a key is pressed.
///
/// # Example
///
/// ```rust
/// use teacup::{KeyMsg, KeyType};
///
/// fn handle_key(key: &KeyMsg) {
///     match key.key_type {
///         KeyType::Enter => println!("Enter pressed"),
///         KeyType::Runes => println!("Typed: {:?}", key.runes),
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    #[must_use]
    pub const fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// The first rune, if this is character input.
    #[must_use]
    pub fn rune(&self) -> Option<char> {
        if self.key_type == KeyType::Runes {
            self.runes.first().copied()
        } else {
            None
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// Key type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter / carriage return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Tab.
    Tab,
    /// Space bar.
    Space,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Ctrl+C interrupt.
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Enter => "enter",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Tab => "tab",
            Self::Space => " ",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
            Self::CtrlC => "ctrl+c",
        };
        write!(f, "{name}")
    }
}

impl KeyType {
    /// Check if this is a cursor movement key.
    #[must_use]
    pub const fn is_cursor(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::Home
                | Self::End
                | Self::PgUp
                | Self::PgDown
        )
    }
}

/// Convert a crossterm key event to a [`KeyMsg`].
///
/// Returns `None` for keys teacup does not recognize (function keys, media
/// keys, unhandled control combinations); the event loop drops those events.
#[must_use]
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> Option<KeyMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl => {
            if c.to_ascii_lowercase() == 'c' {
                (KeyType::CtrlC, Vec::new())
            } else {
                return None;
            }
        }
        KeyCode::Char(' ') => (KeyType::Space, vec![' ']),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => return None,
    };

    Some(KeyMsg {
        key_type,
        runes,
        alt,
    })
}

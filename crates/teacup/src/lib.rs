#![forbid(unsafe_code)]

//! # Teacup
//!
//! A deliberately small Elm-architecture runtime for terminal applications.
//!
//! Teacup gives you the familiar model/update/view loop without any
//! background machinery: the event loop is single-threaded and synchronous.
//! Every message is produced by a discrete terminal event (or by a command
//! returned from `update`), processed to completion, and followed by a
//! re-render. There are no channels, no spawned threads, and no async
//! runtime, which makes programs built on teacup trivially deterministic to
//! test via [`simulator::ProgramSimulator`].
//!
//! ## Example
//!
//! ```rust
//! use teacup::{Cmd, KeyMsg, KeyType, Message, Model};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! impl Model for Counter {
//!     fn init(&self) -> Option<Cmd> {
//!         None
//!     }
//!
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if let Some(key) = msg.downcast_ref::<KeyMsg>()
//!             && key.key_type == KeyType::Enter
//!         {
//!             self.count += 1;
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Count: {}", self.count)
//!     }
//! }
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod program;
pub mod simulator;

pub use command::{Cmd, quit};
pub use key::{KeyMsg, KeyType, from_crossterm_key};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};

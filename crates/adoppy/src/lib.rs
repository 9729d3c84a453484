#![forbid(unsafe_code)]

//! # Adoppy
//!
//! A terminal rendition of the classic puppy-adoption demo: a fixed catalog
//! of four adoptable puppies, a detail screen for the selected puppy, and
//! nothing else. The interesting part is the shape, not the size — the
//! catalog data lives behind a provider trait, the two-screen navigation is
//! an explicit finite state machine, and both are testable without touching
//! a terminal.
//!
//! ## Modules
//!
//! - [`puppy`] - The immutable `Puppy` value and its closed breed/gender enums
//! - [`catalog`] - The data-provisioning collaborator and the sample catalog
//! - [`messages`] - Navigation events emitted by the screens (the callback contract)
//! - [`nav`] - The `Catalog <-> Detail` navigation state machine
//! - [`screens`] - The two screen models (list and detail)
//! - [`app`] - Top-level router implementing `teacup::Model`
//! - [`theme`] - Semantic color tokens
//! - [`assets`] - Embedded ASCII art placeholders, one per breed
//! - [`cli`] - Command-line interface
//! - [`logging`] - File-backed tracing setup

pub mod app;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod logging;
pub mod messages;
pub mod nav;
pub mod puppy;
pub mod screens;
pub mod theme;

//! Screen models.
//!
//! One model per screen, each owning only its own presentation state and
//! emitting navigation events as messages. Neither screen knows about the
//! other or about the navigation layer; the router in [`crate::app`] wires
//! them together.

mod catalog;
mod detail;

pub use catalog::CatalogScreen;
pub use detail::DetailScreen;

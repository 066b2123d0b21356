//! Menu data for the navigation rail.
//!
//! The rail never owns its menu; it asks a [`NavigationalListService`] for the
//! entries that apply to a subtype and display state, and tells the service
//! which role the user currently has. This crate defines that contract and
//! ships [`StaticMenuSource`], a JSON-backed implementation used by the shell
//! binary and by tests.

pub mod catalog;
pub mod service;
pub mod static_source;

pub use catalog::{MenuCatalog, MenuRecord, MenuSourceError};
pub use service::{MenuStream, NavigationalListService};
pub use static_source::StaticMenuSource;

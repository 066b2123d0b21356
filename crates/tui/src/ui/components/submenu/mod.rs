//! Expandable submenu for rail entries that have children.
//!
//! At most one parent is expanded at a time. The panel closes through its
//! close button, a click on the backdrop, or navigation to one of the
//! children; each path leaves the same state behind.

mod state;
mod submenu_component;

pub use state::{CloseReason, SubmenuState};
pub use submenu_component::SubmenuComponent;

//! Left navigation rail.
//!
//! A vertical column holding, top to bottom: the brand link, one entry per
//! top-level menu item, a flexible spacer, the theme picker entry, and, for
//! anonymous users, the sign-in call to action. Nothing is shown until a
//! view-model arrives or while the display mode is `disabled`.
//!
//! Entries with children expand the submenu panel instead of navigating.

mod nav_rail_component;
mod state;

pub use nav_rail_component::{NavRailComponent, RAIL_WIDTH};
pub use state::{NavRailState, RailEntry};

//! Theme styling for the navigation rail.
//!
//! Palettes (Dracula, Nord, and an ANSI 256-color fallback) map onto semantic
//! roles; components style themselves through [`Theme`] and the builders in
//! [`theme_helpers`] rather than hard-coding colors.

pub mod catalog;
pub mod loader;
pub mod palettes;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use loader::load;
pub use roles::Theme;

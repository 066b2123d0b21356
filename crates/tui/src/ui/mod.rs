//! Terminal presentation of the navigation shell: the rail, the submenu
//! panel, the theme picker, and the runtime loop driving them.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;

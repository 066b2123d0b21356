//! UI components: navigation rail, submenu panel, theme picker.

pub mod component;
pub mod icon;
pub mod nav_rail;
pub mod submenu;
pub mod theme_picker;

pub use nav_rail::NavRailComponent;
pub use submenu::SubmenuComponent;
pub use theme_picker::ThemePickerComponent;

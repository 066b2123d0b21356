//! Theme picker modal wiring.

mod state;
mod theme_picker_component;

pub use state::ThemePickerState;
pub use theme_picker_component::ThemePickerComponent;

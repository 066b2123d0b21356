//! Shared types for the navigation rail: menu data, host inputs, the derived
//! view-model, and the message/effect vocabulary used by the terminal UI.

mod menu;
mod mode;
mod view_model;

pub use menu::{MenuItem, StructuralSubtype};
pub use mode::{DisplayMode, ParseModeError, ParseRoleError, UserRole};
pub use view_model::ViewModel;

/// Messages delivered to the UI from outside the input stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
    /// A fresh view-model resolved for the latest mode/role combination
    ViewModelReady(ViewModel),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the shell to an absolute route path
    Navigate(String),
    /// Send the browsing context to the external sign-in page
    RedirectToLogin,
    /// Show a modal on top of the rail and content
    ShowModal(Modal),
    /// Close the currently open modal
    CloseModal,
    /// Leave the application
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    ThemePicker,
}

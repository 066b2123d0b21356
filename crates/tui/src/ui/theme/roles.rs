use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Colors a palette assigns to each part of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRoles {
    /// Screen background behind the content area.
    pub background: Color,
    /// Panels: content block, submenu panel, modals.
    pub surface: Color,
    pub border: Color,
    /// Border of the focused panel.
    pub focus: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Icons, hint keys, the current route.
    pub accent: Color,
    /// Marks the active theme in the picker.
    pub success: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Rail band holding the menu entries.
    pub rail_bg: Color,
    pub rail_fg: Color,

    /// Dimmed layer drawn behind the submenu panel and modals.
    pub backdrop: Color,
}

/// Style builders over a set of [`ThemeRoles`].
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.focus } else { roles.border })
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    fn rail_style(&self) -> Style {
        Style::default().fg(self.roles().rail_fg).bg(self.roles().rail_bg)
    }

    /// Inverted rail colors for the entry whose submenu is expanded or whose
    /// route is current.
    fn rail_expanded_style(&self) -> Style {
        Style::default()
            .fg(self.roles().rail_bg)
            .bg(self.roles().rail_fg)
            .add_modifier(Modifier::BOLD)
    }

    fn backdrop_style(&self) -> Style {
        Style::default().bg(self.roles().backdrop).fg(self.roles().text_muted)
    }

    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }

    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }

    fn accent_emphasis_style(&self) -> Style {
        self.accent_primary_style().add_modifier(Modifier::BOLD)
    }
}

//! Built-in palettes.
//!
//! Each palette is a constant role table; [`PaletteTheme`] wraps one so it can
//! be handed around as a `dyn Theme`.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Dracula (https://draculatheme.com), with the rail one step below the background.
pub const DRACULA: ThemeRoles = ThemeRoles {
    background: Color::Rgb(0x28, 0x2A, 0x36),
    surface: Color::Rgb(0x28, 0x2A, 0x36),
    border: Color::Rgb(0x44, 0x47, 0x5A),
    focus: Color::Rgb(0x8B, 0xE9, 0xFD),
    text: Color::Rgb(0xF8, 0xF8, 0xF2),
    text_secondary: Color::Rgb(0xBD, 0x93, 0xF9),
    text_muted: Color::Rgb(0x62, 0x72, 0xA4),
    accent: Color::Rgb(0xFF, 0x79, 0xC6),
    success: Color::Rgb(0x50, 0xFA, 0x7B),
    selection_bg: Color::Rgb(0x44, 0x47, 0x5A),
    selection_fg: Color::Rgb(0xF8, 0xF8, 0xF2),
    rail_bg: Color::Rgb(0x1F, 0x21, 0x2B),
    rail_fg: Color::Rgb(0xBD, 0x93, 0xF9),
    backdrop: Color::Rgb(0x1D, 0x1F, 0x27),
};

/// Nord (https://www.nordtheme.com): Polar Night surfaces, Frost rail.
pub const NORD: ThemeRoles = ThemeRoles {
    background: Color::Rgb(0x2E, 0x34, 0x40),
    surface: Color::Rgb(0x3B, 0x42, 0x52),
    border: Color::Rgb(0x4C, 0x56, 0x6A),
    focus: Color::Rgb(0x88, 0xC0, 0xD0),
    text: Color::Rgb(0xD8, 0xDE, 0xE9),
    text_secondary: Color::Rgb(0xEC, 0xEF, 0xF4),
    text_muted: Color::Rgb(0x4C, 0x56, 0x6A),
    accent: Color::Rgb(0x88, 0xC0, 0xD0),
    success: Color::Rgb(0xA3, 0xBE, 0x8C),
    selection_bg: Color::Rgb(0x43, 0x4C, 0x5E),
    selection_fg: Color::Rgb(0xEC, 0xEF, 0xF4),
    rail_bg: Color::Rgb(0x5E, 0x81, 0xAC),
    rail_fg: Color::Rgb(0xEC, 0xEF, 0xF4),
    backdrop: Color::Rgb(0x1A, 0x1E, 0x28),
};

/// Indexed approximation of Dracula for terminals without truecolor.
pub const ANSI_256: ThemeRoles = ThemeRoles {
    background: Color::Indexed(236),
    surface: Color::Indexed(236),
    border: Color::Indexed(239),
    focus: Color::Indexed(117),
    text: Color::Indexed(255),
    text_secondary: Color::Indexed(250),
    text_muted: Color::Indexed(247),
    accent: Color::Indexed(212),
    success: Color::Indexed(84),
    selection_bg: Color::Indexed(239),
    selection_fg: Color::Indexed(255),
    rail_bg: Color::Indexed(234),
    rail_fg: Color::Indexed(141),
    backdrop: Color::Indexed(232),
};

#[derive(Debug, Clone)]
pub struct PaletteTheme {
    roles: ThemeRoles,
}

impl PaletteTheme {
    pub fn new(roles: ThemeRoles) -> Self {
        Self { roles }
    }
}

impl Theme for PaletteTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

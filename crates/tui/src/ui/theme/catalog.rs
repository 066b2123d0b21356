use ratatui::style::Color;

use super::palettes::{ANSI_256, DRACULA, NORD, PaletteTheme};
use super::roles::{Theme, ThemeRoles};

/// A palette offered in the theme picker.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Identifier persisted in preferences.
    pub id: &'static str,
    pub label: &'static str,
    pub roles: &'static ThemeRoles,
    /// Extra names accepted from `TUI_THEME` and preferences.
    pub aliases: &'static [&'static str],
    /// Indexed palette for terminals without truecolor.
    pub is_ansi_fallback: bool,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        Box::new(PaletteTheme::new(*self.roles))
    }

    /// Background, accent, and rail colors shown as chips in the picker.
    pub fn swatch(&self) -> [Color; 3] {
        [self.roles.background, self.roles.accent, self.roles.rail_bg]
    }

    fn matches(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        roles: &DRACULA,
        aliases: &["dark"],
        is_ansi_fallback: false,
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        roles: &NORD,
        aliases: &["polar"],
        is_ansi_fallback: false,
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        roles: &ANSI_256,
        aliases: &["ansi", "256"],
        is_ansi_fallback: true,
    },
];

pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Definition whose id or alias matches `name`, ignoring case and padding.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let name = name.trim();
    THEME_DEFINITIONS.iter().find(|definition| definition.matches(name))
}

pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}

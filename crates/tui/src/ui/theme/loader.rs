//! Picks the startup theme from environment overrides, the saved preference,
//! and what the terminal can display.

use std::env;

use tracing::debug;

use super::{Theme, ThemeDefinition, catalog};

pub const THEME_ENV: &str = "TUI_THEME";
pub const COLOR_MODE_ENV: &str = "TUI_COLOR_MODE";
pub const FORCE_TRUECOLOR_ENV: &str = "TUI_FORCE_TRUECOLOR";

/// Built theme plus the definition it came from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl From<&'static ThemeDefinition> for LoadedTheme {
    fn from(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Environment inputs relevant to theme selection.
#[derive(Debug, Default, Clone)]
struct ThemeEnv {
    theme: Option<String>,
    color_mode: Option<String>,
    force_truecolor: Option<String>,
    colorterm: Option<String>,
    term: Option<String>,
}

impl ThemeEnv {
    fn capture() -> Self {
        Self {
            theme: env::var(THEME_ENV).ok(),
            color_mode: env::var(COLOR_MODE_ENV).ok(),
            force_truecolor: env::var(FORCE_TRUECOLOR_ENV).ok(),
            colorterm: env::var("COLORTERM").ok(),
            term: env::var("TERM").ok(),
        }
    }

    /// Explicit color mode first, then the force flag, then `COLORTERM`/`TERM` sniffing.
    fn supports_truecolor(&self) -> bool {
        if let Some(explicit) = self.color_mode.as_deref().and_then(parse_color_mode) {
            return explicit;
        }
        if self.force_truecolor.as_deref().is_some_and(is_truthy) {
            return true;
        }
        let advertises = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::to_ascii_lowercase)
                .is_some_and(|value| value.contains("truecolor") || value.contains("24bit"))
        };
        advertises(&self.colorterm) || advertises(&self.term)
    }
}

/// Selects the startup theme for the current environment.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    select(&ThemeEnv::capture(), preferred_theme).into()
}

fn select(theme_env: &ThemeEnv, preferred_theme: Option<&str>) -> &'static ThemeDefinition {
    if !theme_env.supports_truecolor() {
        debug!("terminal lacks truecolor; using the ANSI palette");
        return catalog::default_ansi();
    }
    theme_env
        .theme
        .as_deref()
        .and_then(catalog::resolve)
        .or_else(|| preferred_theme.and_then(catalog::resolve))
        .unwrap_or_else(catalog::default_truecolor)
}

/// `Some(true)` for truecolor, `Some(false)` for 256-color, `None` if unrecognized.
fn parse_color_mode(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(true),
        "ansi256" | "256" | "8bit" => Some(false),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truecolor() -> ThemeEnv {
        ThemeEnv {
            colorterm: Some("truecolor".into()),
            ..ThemeEnv::default()
        }
    }

    #[test]
    fn env_override_beats_saved_preference() {
        let theme_env = ThemeEnv {
            theme: Some("Nord".into()),
            ..truecolor()
        };
        assert_eq!(select(&theme_env, Some("dracula")).id, "nord");
        assert_eq!(select(&truecolor(), Some("polar")).id, "nord");
        assert_eq!(select(&truecolor(), Some("unknown")).id, "dracula");
    }

    #[test]
    fn limited_terminals_fall_back_to_ansi() {
        assert_eq!(select(&ThemeEnv::default(), Some("nord")).id, "ansi256");
        let forced_down = ThemeEnv {
            color_mode: Some("8bit".into()),
            ..truecolor()
        };
        assert_eq!(select(&forced_down, None).id, "ansi256");
    }

    #[test]
    fn force_flag_and_term_enable_truecolor() {
        let forced = ThemeEnv {
            force_truecolor: Some("YES".into()),
            ..ThemeEnv::default()
        };
        assert!(forced.supports_truecolor());
        let term = ThemeEnv {
            term: Some("xterm-truecolor".into()),
            ..ThemeEnv::default()
        };
        assert!(term.supports_truecolor());
        assert_eq!(parse_color_mode("mono"), None);
    }
}

//! Icon resolution for menu entries.
//!
//! Menu data references icons in one of two ways: a `devicon-*` CSS class
//! list naming a technology logo, or an icon-font ligature name such as
//! `home`. The resolver decides which one an identifier is; rendering then
//! turns either into terminal text.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Class prefix marking an identifier as a technology-logo glyph.
pub const GLYPH_CLASS_PREFIX: &str = "devicon-";

/// Class suffixes naming logo variants rather than the technology itself.
const GLYPH_VARIANTS: &[&str] = &["-plain", "-original", "-line", "-wordmark"];

/// Rendering decision for an icon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind<'a> {
    /// No identifier; nothing is drawn.
    Empty,
    /// Logo glyph addressed by its class list.
    Glyph(&'a str),
    /// Icon-font ligature addressed by name.
    Ligature(&'a str),
}

/// Classifies an icon identifier. Anything not carrying the glyph prefix is a
/// ligature, so unknown names never fail.
pub fn resolve_icon(icon: Option<&str>) -> IconKind<'_> {
    match icon.map(str::trim) {
        None | Some("") => IconKind::Empty,
        Some(value) if value.starts_with(GLYPH_CLASS_PREFIX) => IconKind::Glyph(value),
        Some(value) => IconKind::Ligature(value),
    }
}

/// Terminal text for a resolved icon.
pub fn icon_text(kind: IconKind<'_>) -> String {
    match kind {
        IconKind::Empty => String::new(),
        IconKind::Glyph(classes) => format!("[{}]", glyph_name(classes)),
        IconKind::Ligature(name) => ligature_symbol(name).map(str::to_string).unwrap_or_else(|| name.to_string()),
    }
}

/// Styled span for an icon; `large` icons (rail entries) render bold.
pub fn icon_span(icon: Option<&str>, large: bool, style: Style) -> Span<'static> {
    let style = if large { style.add_modifier(Modifier::BOLD) } else { style };
    Span::styled(icon_text(resolve_icon(icon)), style)
}

/// Technology name from a glyph class list: `devicon-rust-plain colored` → `rust`.
fn glyph_name(classes: &str) -> &str {
    let first = classes.split_whitespace().next().unwrap_or(classes);
    let mut name = first.strip_prefix(GLYPH_CLASS_PREFIX).unwrap_or(first);
    for variant in GLYPH_VARIANTS {
        if let Some(index) = name.find(variant) {
            name = &name[..index];
            break;
        }
    }
    name
}

fn ligature_symbol(name: &str) -> Option<&'static str> {
    let symbol = match name {
        "home" => "⌂",
        "close" => "✕",
        "arrow_back" => "←",
        "menu" => "☰",
        "settings" => "⚙",
        "tips_and_updates" => "✦",
        "search" => "⌕",
        "palette" => "◐",
        "login" => "→]",
        "info" => "ⓘ",
        "help" => "?",
        "star" => "★",
        "bolt" => "ϟ",
        "hub" => "⎔",
        "widgets" => "▦",
        "dashboard" => "▤",
        "shield" => "⛉",
        "edit_note" => "✎",
        "article" => "≡",
        "group" => "⚇",
        "person" => "☺",
        "admin_panel_settings" => "⚿",
        "code" => "</>",
        _ => return None,
    };
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_identifiers_are_glyphs() {
        assert_eq!(resolve_icon(Some("devicon-angularjs-plain")), IconKind::Glyph("devicon-angularjs-plain"));
        assert_eq!(
            resolve_icon(Some("devicon-rust-original colored")),
            IconKind::Glyph("devicon-rust-original colored")
        );
    }

    #[test]
    fn everything_else_is_a_ligature() {
        assert_eq!(resolve_icon(Some("home")), IconKind::Ligature("home"));
        assert_eq!(resolve_icon(Some("Devicon-rust")), IconKind::Ligature("Devicon-rust"));
        assert_eq!(resolve_icon(Some("made_up_icon")), IconKind::Ligature("made_up_icon"));
    }

    #[test]
    fn absent_identifier_renders_nothing() {
        assert_eq!(resolve_icon(None), IconKind::Empty);
        assert_eq!(resolve_icon(Some("   ")), IconKind::Empty);
        assert_eq!(icon_text(IconKind::Empty), "");
    }

    #[test]
    fn glyphs_render_as_technology_tags() {
        assert_eq!(icon_text(resolve_icon(Some("devicon-rust-original colored"))), "[rust]");
        assert_eq!(icon_text(resolve_icon(Some("devicon-angularjs-plain"))), "[angularjs]");
        assert_eq!(icon_text(resolve_icon(Some("devicon-nestjs"))), "[nestjs]");
    }

    #[test]
    fn ligatures_map_to_symbols_or_fall_back_to_their_name() {
        assert_eq!(icon_text(resolve_icon(Some("home"))), "⌂");
        assert_eq!(icon_text(resolve_icon(Some("rocket_launch"))), "rocket_launch");
    }

    #[test]
    fn large_icons_are_bold() {
        let span = icon_span(Some("home"), true, Style::default());
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        let span = icon_span(Some("home"), false, Style::default());
        assert!(!span.style.add_modifier.contains(Modifier::BOLD));
    }
}

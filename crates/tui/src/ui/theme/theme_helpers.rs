//! Style and widget builders shared by the rail components.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::Theme;

/// Bordered panel block on the surface color, optionally titled.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let block = Block::bordered()
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    match title {
        Some(title) => block.title(Span::styled(title, theme.text_secondary_style().add_modifier(Modifier::BOLD))),
        None => block,
    }
}

pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let roles = theme.roles();
    Style::default().bg(roles.surface).fg(roles.text)
}

/// Filled call-to-action style used by the sign-in entry.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let roles = theme.roles();
    let style = Style::default().bg(roles.accent).fg(roles.background).add_modifier(Modifier::BOLD);
    if focused { style.add_modifier(Modifier::UNDERLINED) } else { style }
}

/// Alternating key/label spans for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, theme.accent_emphasis_style()),
                Span::styled(*label, theme.text_muted_style()),
            ]
        })
        .collect()
}

/// Draws a rail entry with its lines centered. The focused entry swaps its
/// one-cell padding for a rounded border so the content stays in place.
pub fn render_rail_button(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>, style: Style, border_style: Style, focused: bool) {
    let block = if focused {
        Block::bordered().border_type(BorderType::Rounded).border_style(border_style)
    } else {
        Block::default().borders(Borders::NONE).padding(Padding::uniform(1))
    };
    frame.render_widget(Paragraph::new(lines).centered().block(block).style(style), area);
}

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::{DisplayMode, Effect, MenuItem, Modal};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Block,
};

use super::RailEntry;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::icon::icon_span;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::truncate_to_width;

/// Columns reserved for the rail.
pub const RAIL_WIDTH: u16 = 16;

/// Label columns inside a rail button (rail width minus padding).
const LABEL_WIDTH: usize = RAIL_WIDTH as usize - 2;
const THEME_ICON: &str = "palette";
const SIGN_IN_LABEL: &str = "Sign In";

/// Vertical navigation rail.
///
/// Leaf entries navigate, parents toggle the submenu panel, and the bottom
/// entries open the theme picker or start the sign-in redirect.
#[derive(Debug, Default)]
pub struct NavRailComponent;

impl NavRailComponent {
    /// Effects for activating the entry at `index`.
    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        let Some(entry) = app.nav_rail.entries().get(index).copied() else {
            return Vec::new();
        };
        app.nav_rail.selected_index = index;
        match entry {
            RailEntry::Brand => vec![Effect::Navigate("/".to_string())],
            RailEntry::Menu(position) => {
                let Some(item) = app.view_model.as_ref().and_then(|view_model| view_model.menu_items.get(position)).cloned() else {
                    return Vec::new();
                };
                if item.has_children() {
                    app.submenu.toggle(item);
                    Vec::new()
                } else {
                    vec![Effect::Navigate(item.route_path())]
                }
            }
            RailEntry::ThemePicker => vec![Effect::ShowModal(Modal::ThemePicker)],
            RailEntry::SignIn => vec![Effect::RedirectToLogin],
        }
    }

    fn entry_height(mode: DisplayMode) -> u16 {
        match mode {
            DisplayMode::Verbose => 4,
            _ => 3,
        }
    }

    /// Row rectangles for every entry. The theme and sign-in entries are pinned
    /// to the bottom; entries that do not fit are given an empty rectangle.
    fn entry_areas(entries: &[RailEntry], mode: DisplayMode, area: Rect) -> Vec<Rect> {
        let height = Self::entry_height(mode);
        let pinned = entries
            .iter()
            .filter(|entry| matches!(entry, RailEntry::ThemePicker | RailEntry::SignIn))
            .count();
        let top = entries.len() - pinned;

        let mut constraints = vec![Constraint::Length(height); top];
        constraints.push(Constraint::Min(0));
        constraints.extend(std::iter::repeat_n(Constraint::Length(height), pinned));
        let mut rows = Layout::vertical(constraints).split(area).to_vec();
        rows.remove(top);
        rows
    }

    fn menu_lines(item: &MenuItem, mode: DisplayMode, expanded: bool, style: ratatui::style::Style) -> Vec<Line<'static>> {
        let (marker, label_width) = if expanded { (" ›", LABEL_WIDTH - 2) } else { ("", LABEL_WIDTH) };
        match mode {
            DisplayMode::Verbose => vec![
                Line::from(icon_span(item.icon.as_deref(), true, style)),
                Line::from(Span::styled(format!("{}{marker}", truncate_to_width(&item.text, label_width)), style)),
            ],
            _ => vec![Line::from(vec![icon_span(item.icon.as_deref(), true, style), Span::styled(marker, style)])],
        }
    }
}

impl Component for NavRailComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.nav_rail.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.nav_rail.select_previous(),
            KeyCode::Home => app.nav_rail.select_first(),
            KeyCode::End => app.nav_rail.select_last(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                let index = app.nav_rail.selected_index;
                return Self::activate(app, index);
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.nav_rail.entry_at(mouse.column, mouse.row) {
            Some(index) => Self::activate(app, index),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.nav_rail.last_area = area;
        let Some(view_model) = app.view_model.as_ref().filter(|view_model| view_model.is_rail_visible()) else {
            app.nav_rail.per_entry_areas.clear();
            return;
        };
        let theme = &*app.ctx.theme;
        let mode = view_model.mode;

        let block = Block::default().style(theme.rail_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = Self::entry_areas(app.nav_rail.entries(), mode, inner);
        for (index, (entry, row_area)) in app.nav_rail.entries().iter().zip(areas.iter()).enumerate() {
            if row_area.is_empty() {
                continue;
            }
            let focused = index == app.nav_rail.selected_index;
            let border_style = theme.border_style(true);
            match entry {
                RailEntry::Brand => {
                    let style = theme.rail_style().add_modifier(Modifier::BOLD);
                    let lines = vec![Line::from(Span::styled(truncate_to_width(&app.ctx.config.brand_label, LABEL_WIDTH), style))];
                    th::render_rail_button(frame, *row_area, lines, style, border_style, focused);
                }
                RailEntry::Menu(position) => {
                    let Some(item) = view_model.menu_items.get(*position) else {
                        continue;
                    };
                    let expanded = app.submenu.is_active(&item.id);
                    let current = !item.has_children() && item.route_path() == app.current_route;
                    let style = if expanded || current { theme.rail_expanded_style() } else { theme.rail_style() };
                    th::render_rail_button(frame, *row_area, Self::menu_lines(item, mode, expanded, style), style, border_style, focused);
                }
                RailEntry::ThemePicker => {
                    let style = theme.rail_style();
                    let mut lines = vec![Line::from(icon_span(Some(THEME_ICON), true, style))];
                    if mode == DisplayMode::Verbose {
                        lines.push(Line::from(Span::styled("Theme", style)));
                    }
                    th::render_rail_button(frame, *row_area, lines, style, border_style, focused);
                }
                RailEntry::SignIn => {
                    let style = th::button_primary_style(theme, focused);
                    let lines = vec![Line::from(Span::styled(SIGN_IN_LABEL, style))];
                    th::render_rail_button(frame, *row_area, lines, theme.rail_style(), border_style, focused);
                }
            }
        }
        app.nav_rail.per_entry_areas = areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Navigate  "), (" Enter", " Open  ")])
    }
}

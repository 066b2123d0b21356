use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::CloseReason;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::icon::icon_span;
use crate::ui::theme::theme_helpers as th;

const CLOSE_LABEL: &str = " ✕ ";

/// Panel listing the children of the expanded rail entry.
#[derive(Debug, Default)]
pub struct SubmenuComponent;

impl SubmenuComponent {
    fn navigate_to_child(app: &App, index: usize) -> Vec<Effect> {
        app.submenu
            .children()
            .get(index)
            .map(|child| vec![Effect::Navigate(child.route_path())])
            .unwrap_or_default()
    }
}

impl Component for SubmenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Left => app.submenu.close(CloseReason::CloseButton),
            KeyCode::Down | KeyCode::Char('j') => app.submenu.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.submenu.select_previous(),
            KeyCode::Enter | KeyCode::Right => {
                return app
                    .submenu
                    .selected_child_item()
                    .map(|child| vec![Effect::Navigate(child.route_path())])
                    .unwrap_or_default();
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if app.submenu.is_on_close_button(mouse.column, mouse.row) {
            app.submenu.close(CloseReason::CloseButton);
            return Vec::new();
        }
        if let Some(index) = app.submenu.child_at(mouse.column, mouse.row) {
            app.submenu.selected_child = index;
            return Self::navigate_to_child(app, index);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(parent) = app.submenu.active_parent().cloned() else {
            return;
        };
        let theme = &*app.ctx.theme;

        frame.render_widget(Clear, area);
        let block = th::block(theme, None, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header_area, divider_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let close_width = CLOSE_LABEL.chars().count() as u16;
        let [title_area, close_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(close_width)]).areas(header_area);
        let title = Line::from(vec![
            Span::raw(" "),
            icon_span(parent.icon.as_deref(), false, theme.accent_primary_style()),
            Span::raw(" "),
            Span::styled(parent.text.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(Paragraph::new(Span::styled(CLOSE_LABEL, theme.text_secondary_style())), close_area);

        frame.render_widget(
            Paragraph::new("").block(Block::default().borders(Borders::TOP).border_style(theme.border_style(false))),
            divider_area,
        );

        let mut child_areas = Vec::with_capacity(parent.children.len());
        for (index, child) in parent.children.iter().enumerate() {
            let row = index as u16;
            if row >= list_area.height {
                break;
            }
            let row_area = Rect::new(list_area.x, list_area.y + row, list_area.width, 1);
            let selected = index == app.submenu.selected_child;
            let text_style = if selected { theme.selection_style() } else { theme.text_primary_style() };
            let line = Line::from(vec![
                Span::styled(if selected { " › " } else { "   " }, theme.accent_primary_style()),
                icon_span(child.icon.as_deref(), false, theme.accent_primary_style()),
                Span::raw(" "),
                Span::styled(child.text.clone(), text_style),
            ]);
            frame.render_widget(Paragraph::new(line).style(if selected { theme.selection_style() } else { th::panel_style(theme) }), row_area);
            child_areas.push(row_area);
        }

        app.submenu.panel_area = area;
        app.submenu.close_button_area = close_area;
        app.submenu.per_child_areas = child_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Navigate  "), (" Enter", " Open  "), (" Esc", " Close ")])
    }
}

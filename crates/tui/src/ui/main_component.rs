use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::{Effect, Modal, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use super::components::component::Component;
use super::components::nav_rail::{RAIL_WIDTH, RailEntry};
use super::components::submenu::CloseReason;
use super::components::{NavRailComponent, SubmenuComponent, ThemePickerComponent};
use super::theme::theme_helpers as th;
use super::utils::centered_rect;
use crate::app::App;

const SUBMENU_WIDTH: u16 = 34;
/// Rows taken by the panel border, header, and divider.
const SUBMENU_CHROME_HEIGHT: u16 = 4;

const GLOBAL_HINTS: &[(&str, &str)] = &[(" F2", " Mode  "), (" F3", " Role  "), (" ^T", " Theme  "), (" q", " Quit ")];

/// Root view: rail, content area, submenu overlay, and modal.
#[derive(Debug, Default)]
pub struct MainView {
    rail_view: NavRailComponent,
    submenu_view: SubmenuComponent,
    /// Currently open modal component
    modal_view: Option<ThemePickerComponent>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the open modal kind (use None to clear).
    pub fn set_open_modal_kind(&mut self, app: &mut App, modal: Option<Modal>) {
        self.modal_view = match modal {
            Some(Modal::ThemePicker) => {
                app.theme_picker.set_active_theme(&app.ctx.active_theme_id);
                Some(ThemePickerComponent::default())
            }
            None => None,
        };
        app.open_modal_kind = modal;
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Panel area for the expanded submenu: beside the rail, aligned with the
    /// parent's rail entry and clamped to the content area.
    fn submenu_area(app: &App, content: Rect) -> Option<Rect> {
        let parent = app.submenu.active_parent()?;
        let view_model = app.view_model.as_ref()?;
        let entry_row = app
            .nav_rail
            .entries()
            .iter()
            .position(|entry| matches!(entry, RailEntry::Menu(index) if view_model.menu_items.get(*index).is_some_and(|item| item.id == parent.id)))
            .and_then(|index| app.nav_rail.per_entry_areas.get(index))
            .map(|area| area.y)
            .unwrap_or(content.y);

        let width = SUBMENU_WIDTH.min(content.width);
        let wanted = SUBMENU_CHROME_HEIGHT + parent.children.len() as u16;
        let height = wanted.min(content.height);
        let y = entry_row.min(content.bottom().saturating_sub(height)).max(content.y);
        Some(Rect::new(content.x, y, width, height))
    }

    fn render_content(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Content "), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Route     ", theme.text_muted_style()),
                Span::styled(app.current_route.clone(), theme.accent_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("Location  ", theme.text_muted_style()),
                Span::styled(app.location.href().unwrap_or("(unknown)").to_string(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("Mode      ", theme.text_muted_style()),
                Span::styled(app.mode().to_string(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("Role      ", theme.text_muted_style()),
                Span::styled(app.role().to_string(), theme.text_primary_style()),
            ]),
        ];
        if app.view_model.is_none() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Waiting for menu data…", theme.text_secondary_style())));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let [status_area, hints_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        if let Some(status) = app.status.as_deref() {
            frame.render_widget(Paragraph::new(Span::styled(status.to_string(), theme.text_secondary_style())), status_area);
        }
        frame.render_widget(Paragraph::new(Line::from(self.get_hint_spans(app))), hints_area);
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(modal) = self.modal_view.as_mut() {
            return modal.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::Quit],
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Effect::ShowModal(Modal::ThemePicker)];
            }
            KeyCode::F(2) => {
                app.cycle_mode();
                return Vec::new();
            }
            KeyCode::F(3) => {
                app.cycle_role();
                return Vec::new();
            }
            _ => {}
        }

        if app.submenu.is_open() {
            return self.submenu_view.handle_key_events(app, key);
        }
        self.rail_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if let Some(modal) = self.modal_view.as_mut() {
            return modal.handle_mouse_events(app, mouse);
        }
        if app.submenu.is_open() && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            if app.submenu.is_inside_panel(mouse.column, mouse.row) {
                return self.submenu_view.handle_mouse_events(app, mouse);
            }
            if !app.nav_rail.contains(mouse.column, mouse.row) {
                app.submenu.close(CloseReason::Backdrop);
                return Vec::new();
            }
        }
        self.rail_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::panel_style(&*app.ctx.theme)), area);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(area);
        let rail_width = if app.nav_rail.is_visible() { RAIL_WIDTH.min(body.width) } else { 0 };
        let [rail_area, content_area] = Layout::horizontal([Constraint::Length(rail_width), Constraint::Min(0)]).areas(body);

        self.rail_view.render(frame, rail_area, app);
        Self::render_content(frame, content_area, app);

        if let Some(panel_area) = Self::submenu_area(app, content_area) {
            frame.render_widget(Block::default().style(app.ctx.theme.backdrop_style()), content_area);
            self.submenu_view.render(frame, panel_area, app);
        }

        self.render_footer(frame, footer, app);

        if let Some(modal) = self.modal_view.as_mut() {
            frame.render_widget(Block::default().style(app.ctx.theme.backdrop_style()), area);
            modal.render(frame, centered_rect(60, 50, area), app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        if let Some(modal) = self.modal_view.as_ref() {
            return modal.get_hint_spans(app);
        }
        let mut spans = if app.submenu.is_open() {
            self.submenu_view.get_hint_spans(app)
        } else {
            self.rail_view.get_hint_spans(app)
        };
        spans.extend(th::build_hint_spans(&*app.ctx.theme, GLOBAL_HINTS));
        spans
    }
}

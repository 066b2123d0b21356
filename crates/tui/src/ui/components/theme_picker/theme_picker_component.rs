use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::Effect;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::catalog::ThemeDefinition;
use crate::ui::theme::theme_helpers as th;

const LABEL_WIDTH: usize = 18;

/// Theme picker modal controller.
#[derive(Debug, Default)]
pub struct ThemePickerComponent {
    list_area: Rect,
}

impl ThemePickerComponent {
    fn option_line(definition: &ThemeDefinition, active_theme_id: &str, is_selected: bool, theme: &dyn Theme) -> ListItem<'static> {
        let mut spans = vec![Span::styled(if is_selected { "> " } else { "  " }, theme.text_secondary_style())];

        let mut label_style = theme.text_primary_style();
        if is_selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!("{:<LABEL_WIDTH$}", definition.label), label_style));
        spans.push(Span::styled(
            if definition.is_ansi_fallback { "[ANSI]   " } else { "         " },
            theme.text_secondary_style(),
        ));
        spans.push(if definition.id.eq_ignore_ascii_case(active_theme_id) {
            Span::styled("● Active ", theme.status_success())
        } else {
            Span::raw("         ")
        });
        for color in definition.swatch() {
            spans.push(Span::styled("   ", Style::default().bg(color)));
            spans.push(Span::raw(" "));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Component for ThemePickerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => return vec![Effect::CloseModal],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::CloseModal],
            KeyCode::Enter => {
                if let Some(option) = app.theme_picker.selected_option() {
                    app.apply_theme_selection(option.id);
                }
                return vec![Effect::CloseModal];
            }
            KeyCode::Up | KeyCode::Char('k') => app.theme_picker.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.theme_picker.select_next(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = ratatui::layout::Position::new(mouse.column, mouse.row);
        if !self.list_area.contains(position) {
            return Vec::new();
        }
        let index = usize::from(mouse.row - self.list_area.y);
        if let Some(option) = app.theme_picker.options().get(index).copied() {
            app.theme_picker.selected_index = index;
            app.apply_theme_selection(option.id);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Clear, area);
        let block = th::block(theme, Some(" Theme "), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [intro_area, list_area] = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(inner);
        let intro = vec![
            Line::from(Span::styled("Pick a palette for the rail and its panels.", theme.text_secondary_style())),
            Line::from(Span::styled("Enter applies and remembers the choice, Esc closes.", theme.text_muted_style())),
        ];
        frame.render_widget(Paragraph::new(intro).wrap(Wrap { trim: true }), intro_area);

        let options: Vec<ListItem> = app
            .theme_picker
            .options()
            .iter()
            .enumerate()
            .map(|(index, definition)| {
                Self::option_line(definition, &app.ctx.active_theme_id, index == app.theme_picker.selected_index, theme)
            })
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(app.theme_picker.selected_index));
        frame.render_stateful_widget(List::new(options), list_area, &mut list_state);
        self.list_area = list_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Navigate  "), (" Enter", " Apply  "), (" Esc", " Close ")])
    }
}

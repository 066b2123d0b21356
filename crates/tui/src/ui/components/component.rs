//! Component abstraction shared by the rail, the submenu panel, and modals.

use crossterm::event::{KeyEvent, MouseEvent};
use navrail_types::Effect;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI element with localized event handling and rendering.
///
/// Components mutate their own slice of [`App`] state directly and report
/// cross-cutting side effects (navigation, modals, sign-in) as [`Effect`]s for
/// the runtime to execute.
pub(crate) trait Component {
    /// Handle a key event while this component owns keyboard input.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render into `area`. Layout rectangles needed for hit testing are
    /// recorded on the component's state.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component owns input.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}

/// Index of the rectangle under the pointer, if any.
pub(crate) fn find_target_index_by_mouse_position(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = ratatui::layout::Position::new(column, row);
    areas.iter().position(|area| area.contains(position))
}

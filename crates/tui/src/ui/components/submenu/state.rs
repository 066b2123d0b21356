use navrail_types::{MenuItem, ViewModel};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::component::find_target_index_by_mouse_position;

/// Why the submenu was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Navigated,
    /// The parent was activated again while expanded.
    Toggled,
    /// A new menu no longer contains the expanded parent.
    MenuRefreshed,
}

/// Which rail entry, if any, has its children expanded.
#[derive(Debug, Default, Clone)]
pub struct SubmenuState {
    active_parent: Option<MenuItem>,
    /// Highlighted child inside the panel.
    pub selected_child: usize,
    /// Last rendered panel area.
    pub panel_area: Rect,
    /// Last rendered close button area.
    pub close_button_area: Rect,
    /// Last rendered child row areas, in child order.
    pub per_child_areas: Vec<Rect>,
}

impl SubmenuState {
    /// Expands `item`, replacing any previously expanded parent.
    pub fn open(&mut self, item: MenuItem) {
        debug!(parent = %item.id, "submenu opened");
        self.active_parent = Some(item);
        self.selected_child = 0;
        self.per_child_areas.clear();
    }

    pub fn close(&mut self, reason: CloseReason) {
        if let Some(parent) = self.active_parent.take() {
            debug!(parent = %parent.id, ?reason, "submenu closed");
        }
        self.selected_child = 0;
        self.panel_area = Rect::default();
        self.close_button_area = Rect::default();
        self.per_child_areas.clear();
    }

    /// Closes when `item` is already expanded, otherwise expands it.
    pub fn toggle(&mut self, item: MenuItem) {
        if self.is_active(&item.id) {
            self.close(CloseReason::Toggled);
        } else {
            self.open(item);
        }
    }

    pub fn is_open(&self) -> bool {
        self.active_parent.is_some()
    }

    pub fn active_parent(&self) -> Option<&MenuItem> {
        self.active_parent.as_ref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_parent.as_ref().is_some_and(|parent| parent.id == id)
    }

    pub fn children(&self) -> &[MenuItem] {
        self.active_parent.as_ref().map(|parent| parent.children.as_slice()).unwrap_or_default()
    }

    pub fn selected_child_item(&self) -> Option<&MenuItem> {
        self.children().get(self.selected_child)
    }

    pub fn select_next(&mut self) {
        let len = self.children().len();
        if len > 0 {
            self.selected_child = (self.selected_child + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.children().len();
        if len > 0 {
            self.selected_child = (self.selected_child + len - 1) % len;
        }
    }

    /// Child row under the pointer.
    pub fn child_at(&self, column: u16, row: u16) -> Option<usize> {
        find_target_index_by_mouse_position(&self.per_child_areas, column, row)
    }

    pub fn is_on_close_button(&self, column: u16, row: u16) -> bool {
        find_target_index_by_mouse_position(&[self.close_button_area], column, row).is_some()
    }

    pub fn is_inside_panel(&self, column: u16, row: u16) -> bool {
        find_target_index_by_mouse_position(&[self.panel_area], column, row).is_some()
    }

    /// Re-resolves the expanded parent against a fresh view-model.
    pub fn refresh(&mut self, view_model: &ViewModel) {
        let Some(active_id) = self.active_parent.as_ref().map(|parent| parent.id.clone()) else {
            return;
        };
        match view_model.top_level(&active_id).filter(|item| item.has_children()) {
            Some(updated) => {
                let len = updated.children.len();
                self.active_parent = Some(updated.clone());
                self.selected_child = self.selected_child.min(len.saturating_sub(1));
            }
            None => self.close(CloseReason::MenuRefreshed),
        }
    }
}

use navrail_types::ViewModel;
use ratatui::layout::Rect;

use crate::ui::components::component::find_target_index_by_mouse_position;

/// A slot in the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailEntry {
    /// Brand mark linking to the root route.
    Brand,
    /// Top-level menu item at this index of the view-model's items.
    Menu(usize),
    ThemePicker,
    /// Role-gated sign-in call to action.
    SignIn,
}

/// Selection and layout bookkeeping for the rail.
#[derive(Debug, Default, Clone)]
pub struct NavRailState {
    entries: Vec<RailEntry>,
    /// Index into `entries` of the highlighted entry.
    pub selected_index: usize,
    /// Last rendered area of the rail.
    pub last_area: Rect,
    /// Last rendered per-entry areas, parallel to `entries`.
    pub per_entry_areas: Vec<Rect>,
}

impl NavRailState {
    /// Recomputes the entries for a view-model, keeping the highlighted entry
    /// when it still exists.
    pub fn rebuild(&mut self, view_model: Option<&ViewModel>) {
        let previous = self.selected_entry();
        self.entries = match view_model {
            Some(view_model) if view_model.is_rail_visible() => {
                let mut entries = Vec::with_capacity(view_model.menu_items.len() + 3);
                entries.push(RailEntry::Brand);
                entries.extend((0..view_model.menu_items.len()).map(RailEntry::Menu));
                entries.push(RailEntry::ThemePicker);
                if view_model.shows_sign_in() {
                    entries.push(RailEntry::SignIn);
                }
                entries
            }
            _ => Vec::new(),
        };
        self.per_entry_areas.clear();
        self.selected_index = previous
            .and_then(|entry| self.entries.iter().position(|candidate| *candidate == entry))
            .unwrap_or_else(|| self.selected_index.min(self.entries.len().saturating_sub(1)));
    }

    pub fn entries(&self) -> &[RailEntry] {
        &self.entries
    }

    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn selected_entry(&self) -> Option<RailEntry> {
        self.entries.get(self.selected_index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.entries.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.entries.len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.entries.len().saturating_sub(1);
    }

    /// Index of the entry under the pointer.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        find_target_index_by_mouse_position(&self.per_entry_areas, column, row)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        find_target_index_by_mouse_position(&[self.last_area], column, row).is_some()
    }
}

#[cfg(test)]
mod tests {
    use navrail_types::{DisplayMode, MenuItem, UserRole};

    use super::*;

    fn view_model(mode: DisplayMode, role: UserRole, count: usize) -> ViewModel {
        let items = (0..count).map(|i| MenuItem::new(format!("m{i}"), format!("Item {i}"))).collect();
        ViewModel::new(mode, role, items)
    }

    #[test]
    fn disabled_mode_or_missing_view_model_hides_the_rail() {
        let mut state = NavRailState::default();
        state.rebuild(None);
        assert!(!state.is_visible());
        for role in UserRole::ALL {
            state.rebuild(Some(&view_model(DisplayMode::Disabled, role, 3)));
            assert!(!state.is_visible());
            assert_eq!(state.selected_entry(), None);
        }
    }

    #[test]
    fn sign_in_entry_only_for_anonymous_users() {
        let mut state = NavRailState::default();
        state.rebuild(Some(&view_model(DisplayMode::Verbose, UserRole::None, 2)));
        assert_eq!(
            state.entries(),
            &[RailEntry::Brand, RailEntry::Menu(0), RailEntry::Menu(1), RailEntry::ThemePicker, RailEntry::SignIn]
        );

        state.rebuild(Some(&view_model(DisplayMode::Verbose, UserRole::Admin, 2)));
        assert!(!state.entries().contains(&RailEntry::SignIn));
    }

    #[test]
    fn rebuild_keeps_highlighted_entry_when_possible() {
        let mut state = NavRailState::default();
        state.rebuild(Some(&view_model(DisplayMode::Verbose, UserRole::None, 3)));
        state.select_last();
        assert_eq!(state.selected_entry(), Some(RailEntry::SignIn));

        state.rebuild(Some(&view_model(DisplayMode::Verbose, UserRole::None, 1)));
        assert_eq!(state.selected_entry(), Some(RailEntry::SignIn));

        state.rebuild(Some(&view_model(DisplayMode::Verbose, UserRole::Admin, 1)));
        assert_eq!(state.selected_entry(), Some(RailEntry::ThemePicker));
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = NavRailState::default();
        state.rebuild(Some(&view_model(DisplayMode::Minimal, UserRole::Regular, 1)));
        state.select_previous();
        assert_eq!(state.selected_entry(), Some(RailEntry::ThemePicker));
        state.select_next();
        assert_eq!(state.selected_entry(), Some(RailEntry::Brand));
    }
}

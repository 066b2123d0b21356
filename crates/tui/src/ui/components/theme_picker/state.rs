use crate::ui::theme::catalog::{self, ThemeDefinition};

/// Highlight bookkeeping for the theme picker modal.
#[derive(Debug, Clone)]
pub struct ThemePickerState {
    options: Vec<&'static ThemeDefinition>,
    pub selected_index: usize,
}

impl Default for ThemePickerState {
    fn default() -> Self {
        Self {
            options: catalog::all().iter().collect(),
            selected_index: 0,
        }
    }
}

impl ThemePickerState {
    pub fn selected_option(&self) -> Option<&'static ThemeDefinition> {
        self.options.get(self.selected_index).copied()
    }

    pub fn options(&self) -> &[&'static ThemeDefinition] {
        &self.options
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected_index = (self.selected_index + self.options.len() - 1) % self.options.len();
        }
    }

    /// Moves the highlight onto the active theme so reopening the picker
    /// starts from the current palette.
    pub fn set_active_theme(&mut self, theme_id: &str) {
        if let Some(index) = self.options.iter().position(|definition| definition.id.eq_ignore_ascii_case(theme_id)) {
            self.selected_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_follows_active_theme_and_wraps() {
        let mut state = ThemePickerState::default();
        state.set_active_theme("NORD");
        assert_eq!(state.selected_option().map(|definition| definition.id), Some("nord"));

        state.set_active_theme("missing");
        assert_eq!(state.selected_option().map(|definition| definition.id), Some("nord"));

        state.selected_index = 0;
        state.select_previous();
        assert_eq!(state.selected_index, state.options().len() - 1);
        state.select_next();
        assert_eq!(state.selected_index, 0);
    }
}

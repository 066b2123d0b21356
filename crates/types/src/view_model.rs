use serde::Serialize;

use crate::{DisplayMode, MenuItem, UserRole};

/// Snapshot combining the latest host inputs with the menu resolved for them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewModel {
    pub mode: DisplayMode,
    pub role: UserRole,
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItem>,
}

impl ViewModel {
    pub fn new(mode: DisplayMode, role: UserRole, menu_items: Vec<MenuItem>) -> Self {
        Self { mode, role, menu_items }
    }

    /// Menu entries render only when the rail is not disabled.
    pub fn is_rail_visible(&self) -> bool {
        !self.mode.is_disabled()
    }

    pub fn shows_sign_in(&self) -> bool {
        self.is_rail_visible() && self.role.is_anonymous()
    }

    /// Top-level entry with the given identifier.
    pub fn top_level(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_mode_hides_everything() {
        for role in UserRole::ALL {
            let vm = ViewModel::new(DisplayMode::Disabled, role, vec![MenuItem::new("a", "A")]);
            assert!(!vm.is_rail_visible());
            assert!(!vm.shows_sign_in());
        }
    }

    #[test]
    fn sign_in_is_role_gated() {
        assert!(ViewModel::new(DisplayMode::Verbose, UserRole::None, vec![]).shows_sign_in());
        assert!(!ViewModel::new(DisplayMode::Verbose, UserRole::Admin, vec![]).shows_sign_in());
    }

    #[test]
    fn serializes_with_camel_case_items() {
        let vm = ViewModel::new(DisplayMode::Minimal, UserRole::Regular, vec![]);
        let json = serde_json::to_value(&vm).expect("serialize");
        assert_eq!(json["mode"], "minimal");
        assert_eq!(json["role"], "regular");
        assert!(json["menuItems"].as_array().is_some_and(|items| items.is_empty()));
    }
}

//! JSON menu catalog and its filtering rules.

use std::fs;
use std::path::{Path, PathBuf};

use navrail_types::{MenuItem, StructuralSubtype, UserRole};
use serde::Deserialize;
use thiserror::Error;

/// State key for which no entries are ever returned.
pub const DISABLED_STATE: &str = "DISABLED";

static EMBEDDED_CATALOG: &str = include_str!("../assets/default_menu.json");

#[derive(Debug, Error)]
pub enum MenuSourceError {
    #[error("failed to read menu catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid menu catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A menu entry as stored by the data service, including the metadata used to
/// decide where and for whom it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "menuItemText")]
    pub text: String,
    #[serde(rename = "navSvgPath", default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub route_url: Option<String>,
    /// Surface this entry belongs to; absent means every surface.
    #[serde(default)]
    pub structural_subtype: Option<StructuralSubtype>,
    /// Display states (uppercase mode keys) showing this entry; empty means all.
    #[serde(default)]
    pub states: Vec<String>,
    /// Roles allowed to see this entry; empty means everyone.
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default)]
    pub children: Vec<MenuRecord>,
}

impl MenuRecord {
    fn applies_to(&self, subtype: &StructuralSubtype, state: &str) -> bool {
        let subtype_matches = self
            .structural_subtype
            .as_ref()
            .is_none_or(|own| own.as_str().eq_ignore_ascii_case(subtype.as_str()));
        let state_matches = self.states.is_empty() || self.states.iter().any(|own| own.eq_ignore_ascii_case(state));
        subtype_matches && state_matches
    }

    fn visible_to(&self, role: UserRole) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }

    /// Converts to a [`MenuItem`], keeping only children visible to `role`.
    fn to_item(&self, role: UserRole) -> MenuItem {
        MenuItem {
            id: self.id.clone(),
            text: self.text.clone(),
            icon: self.icon.clone(),
            route_url: self.route_url.clone(),
            children: self
                .children
                .iter()
                .filter(|child| child.visible_to(role))
                .map(|child| child.to_item(role))
                .collect(),
        }
    }
}

/// Ordered set of top-level menu records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog {
    records: Vec<MenuRecord>,
}

impl MenuCatalog {
    pub fn new(records: Vec<MenuRecord>) -> Self {
        Self { records }
    }

    /// Catalog compiled into the binary.
    pub fn embedded() -> Result<Self, MenuSourceError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, MenuSourceError> {
        let records: Vec<MenuRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_path(path: &Path) -> Result<Self, MenuSourceError> {
        let json = fs::read_to_string(path).map_err(|source| MenuSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries for `subtype` in `state` that `role` may see, in catalog order.
    pub fn filter(&self, subtype: &StructuralSubtype, state: &str, role: UserRole) -> Vec<MenuItem> {
        if state.eq_ignore_ascii_case(DISABLED_STATE) {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| record.applies_to(subtype, state) && record.visible_to(role))
            .map(|record| record.to_item(role))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog::from_json_str(
            r#"[
                { "_id": "home", "menuItemText": "Home", "navSvgPath": "home", "routeUrl": "home" },
                { "_id": "admin", "menuItemText": "Admin", "roles": ["admin"], "states": ["VERBOSE"] },
                { "_id": "footer", "menuItemText": "Footer", "structuralSubtype": "FOOTER" },
                { "_id": "docs", "menuItemText": "Docs", "children": [
                    { "_id": "docs.public", "menuItemText": "Public", "routeUrl": "docs/public" },
                    { "_id": "docs.drafts", "menuItemText": "Drafts", "routeUrl": "docs/drafts", "roles": ["publisher", "admin"] }
                ] }
            ]"#,
        )
        .expect("parse catalog")
    }

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn disabled_state_is_always_empty() {
        let items = catalog().filter(&StructuralSubtype::nav(), "DISABLED", UserRole::Admin);
        assert!(items.is_empty());
    }

    #[test]
    fn filters_by_subtype_state_and_role() {
        let catalog = catalog();
        let nav = StructuralSubtype::nav();
        assert_eq!(ids(&catalog.filter(&nav, "VERBOSE", UserRole::Admin)), vec!["home", "admin", "docs"]);
        assert_eq!(ids(&catalog.filter(&nav, "MINIMAL", UserRole::Admin)), vec!["home", "docs"]);
        assert_eq!(ids(&catalog.filter(&nav, "VERBOSE", UserRole::None)), vec!["home", "docs"]);
        assert_eq!(
            ids(&catalog.filter(&StructuralSubtype::new("footer"), "VERBOSE", UserRole::None)),
            vec!["home", "footer", "docs"]
        );
    }

    #[test]
    fn children_are_filtered_by_role() {
        let catalog = catalog();
        let nav = StructuralSubtype::nav();
        let regular = catalog.filter(&nav, "VERBOSE", UserRole::Regular);
        let docs = regular.iter().find(|item| item.id == "docs").expect("docs entry");
        assert_eq!(ids(&docs.children), vec!["docs.public"]);

        let publisher = catalog.filter(&nav, "VERBOSE", UserRole::Publisher);
        let docs = publisher.iter().find(|item| item.id == "docs").expect("docs entry");
        assert_eq!(ids(&docs.children), vec!["docs.public", "docs.drafts"]);
    }

    #[test]
    fn embedded_catalog_parses_and_has_nav_entries() {
        let catalog = MenuCatalog::embedded().expect("embedded catalog");
        assert!(!catalog.is_empty());
        let items = catalog.filter(&StructuralSubtype::nav(), "VERBOSE", UserRole::None);
        assert!(items.iter().any(MenuItem::has_children), "expected at least one submenu parent");
    }

    #[test]
    fn reports_missing_file_with_path() {
        let error = MenuCatalog::from_path(Path::new("/definitely/missing/menu.json")).expect_err("missing file");
        assert!(error.to_string().contains("/definitely/missing/menu.json"));
    }
}

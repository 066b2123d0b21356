//! Hierarchical menu entries as delivered by the navigation data service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single entry of the hierarchical navigation menu.
///
/// Field names on the wire follow the upstream navigation service
/// (`_id`, `menuItemText`, `navSvgPath`, `routeUrl`, `children`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier of the entry.
    #[serde(rename = "_id")]
    pub id: String,
    /// Text shown beneath the icon.
    #[serde(rename = "menuItemText")]
    pub text: String,
    /// Icon reference; either a `devicon-*` class list or an icon-font ligature name.
    #[serde(rename = "navSvgPath", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Route segment the entry links to.
    #[serde(rename = "routeUrl", default, skip_serializing_if = "Option::is_none")]
    pub route_url: Option<String>,
    /// Ordered child entries rendered in the submenu panel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            icon: None,
            route_url: None,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_route(mut self, route_url: impl Into<String>) -> Self {
        self.route_url = Some(route_url.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Whether activating this entry should expand a submenu instead of navigating.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Absolute route path for this entry: `/` followed by the route segment.
    ///
    /// Entries without a route target resolve to the root path.
    pub fn route_path(&self) -> String {
        let segment = self.route_url.as_deref().unwrap_or_default().trim().trim_start_matches('/');
        format!("/{segment}")
    }
}

/// Classification tag used by the data service to pick which entries apply
/// to a given navigation surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralSubtype(String);

impl StructuralSubtype {
    /// Subtype used by the left navigation rail.
    pub const NAV: &'static str = "NAV";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_ascii_uppercase())
    }

    pub fn nav() -> Self {
        Self::new(Self::NAV)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StructuralSubtype {
    fn default() -> Self {
        Self::nav()
    }
}

impl fmt::Display for StructuralSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

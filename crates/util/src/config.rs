//! Runtime configuration for the navigation rail shell.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! explicit overrides from the command line (applied by the caller through the
//! `with_*` builders).

use std::env;
use std::path::PathBuf;

use navrail_types::StructuralSubtype;

use crate::login::{DEFAULT_AUTH_BASE_URL, Location};
use crate::path_processing::expand_tilde;

pub const AUTH_URL_ENV: &str = "NAVRAIL_AUTH_URL";
pub const LOCATION_ENV: &str = "NAVRAIL_LOCATION";
pub const MENU_PATH_ENV: &str = "NAVRAIL_MENU_PATH";
pub const BRAND_ENV: &str = "NAVRAIL_BRAND";

pub const DEFAULT_BRAND_LABEL: &str = "Ngx-Workshop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Base URL of the external sign-in site.
    pub auth_base_url: String,
    /// Absolute URL the shell starts at; `None` when unknown.
    pub location: Option<String>,
    /// JSON menu catalog; `None` selects the embedded catalog.
    pub menu_path: Option<PathBuf>,
    /// Label rendered beneath the brand mark at the top of the rail.
    pub brand_label: String,
    /// Subtype requested from the menu data service.
    pub subtype: StructuralSubtype,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            location: None,
            menu_path: None,
            brand_label: DEFAULT_BRAND_LABEL.to_string(),
            subtype: StructuralSubtype::nav(),
        }
    }
}

impl NavConfig {
    /// Defaults overlaid with any `NAVRAIL_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(value) = non_empty_env(AUTH_URL_ENV) {
            config.auth_base_url = value;
        }
        if let Some(value) = non_empty_env(LOCATION_ENV) {
            config.location = Some(value);
        }
        if let Some(value) = non_empty_env(MENU_PATH_ENV) {
            config.menu_path = Some(expand_tilde(&value));
        }
        if let Some(value) = non_empty_env(BRAND_ENV) {
            config.brand_label = value;
        }
        config
    }

    pub fn with_auth_base_url(mut self, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.auth_base_url = value;
        }
        self
    }

    pub fn with_location(mut self, value: Option<String>) -> Self {
        if value.is_some() {
            self.location = value;
        }
        self
    }

    pub fn with_menu_path(mut self, value: Option<PathBuf>) -> Self {
        if value.is_some() {
            self.menu_path = value;
        }
        self
    }

    pub fn initial_location(&self) -> Location {
        self.location.as_deref().map(Location::parse).unwrap_or_default()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

//! Host-supplied inputs: display mode and user role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendering override requested by the host shell.
///
/// `Disabled` hides the navigation entirely; the remaining modes are forwarded
/// to the data service (uppercased) to select which entries apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Disabled,
    Verbose,
    Minimal,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Disabled, DisplayMode::Verbose, DisplayMode::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Disabled => "disabled",
            DisplayMode::Verbose => "verbose",
            DisplayMode::Minimal => "minimal",
        }
    }

    /// State key understood by the navigation data service.
    pub fn state_key(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, DisplayMode::Disabled)
    }

    /// Next mode in declaration order, wrapping around.
    pub fn cycled(&self) -> Self {
        let index = Self::ALL.iter().position(|mode| mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown display mode '{0}' (expected disabled, verbose or minimal)")]
pub struct ParseModeError(pub String);

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseModeError(value.to_string()))
    }
}

/// Role of the signed-in user, or `None` for anonymous visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Publisher,
    Regular,
    #[default]
    None,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [UserRole::Admin, UserRole::Publisher, UserRole::Regular, UserRole::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Publisher => "publisher",
            UserRole::Regular => "regular",
            UserRole::None => "none",
        }
    }

    /// Anonymous visitors get the sign-in call to action.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, UserRole::None)
    }

    pub fn cycled(&self) -> Self {
        let index = Self::ALL.iter().position(|role| role == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown user role '{0}' (expected admin, publisher, regular or none)")]
pub struct ParseRoleError(pub String);

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseRoleError(value.to_string()))
    }
}

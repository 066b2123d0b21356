//! User preference persistence.
//!
//! A tiny JSON-backed store that records the palette chosen in the theme
//! picker. The file lives in the standard configuration directory
//! (`~/.config/navrail/preferences.json` on most platforms) unless
//! `NAVRAIL_PREFERENCES_PATH` points elsewhere.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{expand_tilde, navrail_config_dir};

pub const PREFERENCES_PATH_ENV: &str = "NAVRAIL_PREFERENCES_PATH";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode preferences: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk shape of the preferences file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreferences {
    /// Theme id chosen in the picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backing {
    File(PathBuf),
    Memory,
}

/// Shared preferences handle; writes go straight to the backing file.
#[derive(Debug)]
pub struct UserPreferences {
    backing: Backing,
    values: Mutex<StoredPreferences>,
}

impl UserPreferences {
    /// Opens the store at `NAVRAIL_PREFERENCES_PATH` or the config directory.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(default_preferences_path())
    }

    /// Opens the store at `path`. A missing file starts empty; an unreadable
    /// document is logged and replaced on the next write.
    pub fn at_path(path: PathBuf) -> Result<Self, PreferencesError> {
        let values = read_stored(&path)?;
        Ok(Self {
            backing: Backing::File(path),
            values: Mutex::new(values),
        })
    }

    /// Store that keeps values in memory only.
    pub fn ephemeral() -> Self {
        Self {
            backing: Backing::Memory,
            values: Mutex::default(),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::File(path) => Some(path),
            Backing::Memory => None,
        }
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.values().preferred_theme.clone()
    }

    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut values = self.values();
        values.preferred_theme = theme_id;
        match &self.backing {
            Backing::File(path) => write_stored(path, &values),
            Backing::Memory => Ok(()),
        }
    }

    fn values(&self) -> MutexGuard<'_, StoredPreferences> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn default_preferences_path() -> PathBuf {
    env::var(PREFERENCES_PATH_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| expand_tilde(&value))
        .unwrap_or_else(|| navrail_config_dir().join(PREFERENCES_FILE_NAME))
}

fn read_stored(path: &Path) -> Result<StoredPreferences, PreferencesError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(StoredPreferences::default()),
        Err(error) => return Err(error.into()),
    };
    Ok(serde_json::from_str(&data).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "Ignoring unreadable preferences file");
        StoredPreferences::default()
    }))
}

fn write_stored(path: &Path, values: &StoredPreferences) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(values)?)?;
    Ok(())
}

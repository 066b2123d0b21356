//! Utilities shared by the navigation rail runtime and its host binary.

pub mod browser;
pub mod config;
pub mod login;
pub mod path_processing;
pub mod preferences;

pub use browser::{BrowserError, open_external};
pub use config::NavConfig;
pub use login::{DEFAULT_AUTH_BASE_URL, Location, build_login_url};
pub use path_processing::{expand_tilde, navrail_config_dir};
pub use preferences::{PreferencesError, UserPreferences};

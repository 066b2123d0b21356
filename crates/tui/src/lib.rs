//! # Navrail terminal shell
//!
//! Terminal rendition of a micro-frontend navigation rail. A host supplies a
//! display mode and a user role; the [`view_model::ViewModelComposer`] turns
//! those inputs into the menu to show by asking a
//! [`NavigationalListService`](navrail_menu::NavigationalListService), always
//! reflecting the latest input combination. The shell renders the result as
//! a left rail with an expandable submenu panel, a theme picker, and a
//! sign-in entry for anonymous users.

mod app;
mod ui;
pub mod view_model;

use std::sync::Arc;

use anyhow::Result;
use navrail_menu::NavigationalListService;
use navrail_types::{DisplayMode, UserRole};
use navrail_util::{NavConfig, UserPreferences};

/// Runs the interactive shell until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode, or when reading terminal input fails.
pub async fn run(
    config: NavConfig,
    service: Arc<dyn NavigationalListService>,
    preferences: Arc<UserPreferences>,
    mode: DisplayMode,
    role: UserRole,
) -> Result<()> {
    ui::runtime::run_app(config, service, preferences, mode, role).await
}

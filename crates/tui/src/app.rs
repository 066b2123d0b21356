//! Application state for the navigation shell.
//!
//! `App` owns everything components read and mutate: the latest view-model,
//! the rail and submenu state, the shell location, and the shared context
//! (theme, preferences, configuration). Inputs for the view-model (mode and
//! role) are forwarded to the [`ViewModelComposer`]; its output arrives back
//! through [`Msg::ViewModelReady`].

use std::sync::Arc;

use navrail_types::{DisplayMode, Effect, Modal, Msg, UserRole, ViewModel};
use navrail_util::{Location, NavConfig, UserPreferences};
use tracing::{debug, info, warn};

use crate::ui::components::nav_rail::NavRailState;
use crate::ui::components::submenu::{CloseReason, SubmenuState};
use crate::ui::components::theme_picker::ThemePickerState;
use crate::ui::theme::{self, Theme, catalog};
use crate::view_model::ViewModelComposer;

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active theme
    pub theme: Box<dyn Theme>,
    /// Canonical id of the active theme
    pub active_theme_id: String,
    /// Persisted user preferences
    pub preferences: Arc<UserPreferences>,
    /// Shell configuration
    pub config: NavConfig,
}

impl SharedCtx {
    pub fn new(config: NavConfig, preferences: Arc<UserPreferences>) -> Self {
        let loaded = theme::load(preferences.preferred_theme().as_deref());
        debug!(theme = loaded.definition.id, "theme loaded");
        Self {
            theme: loaded.theme,
            active_theme_id: loaded.definition.id.to_string(),
            preferences,
            config,
        }
    }
}

#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context (theme, preferences, config)
    pub ctx: SharedCtx,
    composer: ViewModelComposer,
    /// Latest view-model; `None` until the first one arrives
    pub view_model: Option<ViewModel>,
    /// Rail entries and selection
    pub nav_rail: NavRailState,
    /// Expanded submenu, if any
    pub submenu: SubmenuState,
    /// Theme picker modal state
    pub theme_picker: ThemePickerState,
    /// Where the shell currently is
    pub location: Location,
    /// Route path rendered in the content area
    pub current_route: String,
    /// Currently open modal
    pub open_modal_kind: Option<Modal>,
    /// One-line status shown above the hint bar
    pub status: Option<String>,
}

impl App {
    pub fn new(config: NavConfig, preferences: Arc<UserPreferences>, composer: ViewModelComposer) -> Self {
        let location = config.initial_location();
        let current_route = location.path().to_string();
        Self {
            ctx: SharedCtx::new(config, preferences),
            composer,
            view_model: None,
            nav_rail: NavRailState::default(),
            submenu: SubmenuState::default(),
            theme_picker: ThemePickerState::default(),
            location,
            current_route,
            open_modal_kind: None,
            status: None,
        }
    }

    /// Applies a message to the shared state.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::ViewModelReady(view_model) => self.apply_view_model(view_model.clone()),
            Msg::Resize(..) => {}
        }
        Vec::new()
    }

    /// Replaces the view-model, rebuilding the rail and re-resolving the
    /// expanded submenu against the new top-level items.
    pub fn apply_view_model(&mut self, view_model: ViewModel) {
        debug!(
            mode = %view_model.mode,
            role = %view_model.role,
            items = view_model.menu_items.len(),
            "view-model applied"
        );
        self.nav_rail.rebuild(Some(&view_model));
        if view_model.is_rail_visible() {
            self.submenu.refresh(&view_model);
        } else {
            self.submenu.close(CloseReason::MenuRefreshed);
        }
        self.view_model = Some(view_model);
    }

    pub fn mode(&self) -> DisplayMode {
        self.composer.mode()
    }

    pub fn role(&self) -> UserRole {
        self.composer.role()
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.composer.set_mode(mode);
        self.status = Some(format!("Display mode: {mode}"));
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.composer.set_role(role);
        self.status = Some(format!("Role: {role}"));
    }

    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode().cycled());
    }

    pub fn cycle_role(&mut self) {
        self.set_role(self.role().cycled());
    }

    /// Moves the shell to `route_path` and collapses the submenu.
    pub fn navigate(&mut self, route_path: &str) {
        info!(route = route_path, "navigating");
        self.location.navigate(route_path);
        self.current_route = route_path.to_string();
        self.submenu.close(CloseReason::Navigated);
        self.status = None;
    }

    /// Sign-in URL carrying the current location as the return target.
    pub fn login_url(&self) -> String {
        self.location.login_url(&self.ctx.config.auth_base_url)
    }

    /// Switches to the theme with the given id and remembers the choice.
    pub fn apply_theme_selection(&mut self, theme_id: &str) {
        let Some(definition) = catalog::resolve(theme_id) else {
            warn!(theme_id, "Unknown theme selection");
            return;
        };
        self.ctx.theme = definition.build();
        self.ctx.active_theme_id = definition.id.to_string();
        self.theme_picker.set_active_theme(definition.id);
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(definition.id.to_string())) {
            warn!(%error, "Failed to persist theme preference");
            self.status = Some(format!("Theme applied but not saved: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use navrail_menu::{NavigationalListService, StaticMenuSource};
    use navrail_types::MenuItem;

    use super::*;

    fn app_with(config: NavConfig) -> App {
        let service: Arc<dyn NavigationalListService> = Arc::new(StaticMenuSource::embedded().expect("embedded menu"));
        let (composer, _receiver) = ViewModelComposer::spawn(service, config.subtype.clone(), DisplayMode::Verbose, UserRole::None);
        App::new(config, Arc::new(UserPreferences::ephemeral()), composer)
    }

    fn menu_with_parent() -> ViewModel {
        ViewModel::new(
            DisplayMode::Verbose,
            UserRole::None,
            vec![
                MenuItem::new("home", "Home").with_route("home"),
                MenuItem::new("docs", "Docs").with_children(vec![MenuItem::new("intro", "Intro").with_route("docs/intro")]),
            ],
        )
    }

    #[tokio::test]
    async fn navigating_updates_location_and_closes_submenu() {
        let mut app = app_with(NavConfig::default().with_location(Some("https://app.example.com/start?x=1".into())));
        assert_eq!(app.current_route, "/start");

        let view_model = menu_with_parent();
        app.submenu.open(view_model.menu_items[1].clone());
        app.apply_view_model(view_model);
        assert!(app.submenu.is_open());

        app.navigate("/docs/intro");
        assert!(!app.submenu.is_open());
        assert_eq!(app.current_route, "/docs/intro");
        assert_eq!(app.location.href(), Some("https://app.example.com/docs/intro"));
    }

    #[tokio::test]
    async fn submenu_closes_when_parent_leaves_the_menu() {
        let mut app = app_with(NavConfig::default());
        let view_model = menu_with_parent();
        app.submenu.open(view_model.menu_items[1].clone());
        app.apply_view_model(view_model);

        app.apply_view_model(ViewModel::new(DisplayMode::Verbose, UserRole::None, vec![MenuItem::new("home", "Home")]));
        assert!(!app.submenu.is_open());
    }

    #[tokio::test]
    async fn disabled_view_model_hides_rail_and_submenu() {
        let mut app = app_with(NavConfig::default());
        let view_model = menu_with_parent();
        app.submenu.open(view_model.menu_items[1].clone());
        app.apply_view_model(view_model);

        app.apply_view_model(ViewModel::new(DisplayMode::Disabled, UserRole::None, Vec::new()));
        assert!(!app.nav_rail.is_visible());
        assert!(!app.submenu.is_open());
    }

    #[tokio::test]
    async fn login_url_uses_configured_auth_base_and_location() {
        let config = NavConfig::default()
            .with_auth_base_url(Some("https://auth.example.com/login".into()))
            .with_location(Some("https://app.example.com/a b".into()));
        let app = app_with(config);
        assert_eq!(app.login_url(), "https://auth.example.com/login?redirect=https%3A%2F%2Fapp.example.com%2Fa%2520b");

        let anonymous = app_with(NavConfig::default().with_auth_base_url(Some("https://auth.example.com".into())));
        assert_eq!(anonymous.login_url(), "https://auth.example.com?redirect=%2F");
    }

    #[tokio::test]
    async fn theme_selection_is_applied_and_remembered() {
        let mut app = app_with(NavConfig::default());
        app.apply_theme_selection("polar");
        assert_eq!(app.ctx.active_theme_id, "nord");
        assert_eq!(app.ctx.preferences.preferred_theme().as_deref(), Some("nord"));

        app.apply_theme_selection("does-not-exist");
        assert_eq!(app.ctx.active_theme_id, "nord");
    }

    #[tokio::test]
    async fn mode_and_role_inputs_cycle() {
        let mut app = app_with(NavConfig::default());
        app.cycle_mode();
        assert_eq!(app.mode(), DisplayMode::Verbose.cycled());
        app.set_role(UserRole::Admin);
        assert_eq!(app.role(), UserRole::Admin);
        assert_eq!(app.status.as_deref(), Some("Role: admin"));
    }
}

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use navrail_menu::{NavigationalListService, StaticMenuSource};
use navrail_tui::view_model::ViewModelComposer;
use navrail_types::{DisplayMode, UserRole, ViewModel};
use navrail_util::{NavConfig, UserPreferences, navrail_config_dir};
use tracing_subscriber::EnvFilter;

const LOG_FILE_ENV: &str = "NAVRAIL_LOG_FILE";
const LOG_FILE_NAME: &str = "navrail.log";
const VIEW_MODEL_TIMEOUT: Duration = Duration::from_secs(5);

/// Terminal navigation rail for micro-frontend style menus.
#[derive(Debug, Parser)]
#[command(name = "navrail", version, about)]
struct Cli {
    #[command(flatten)]
    shell: ShellArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the first view-model resolved for the given inputs as JSON.
    ViewModel,
    /// Print the sign-in URL for the current location.
    LoginUrl,
}

#[derive(Debug, Args)]
struct ShellArgs {
    /// JSON menu catalog; defaults to the embedded catalog.
    #[arg(long, global = true, value_name = "PATH")]
    menu: Option<PathBuf>,
    /// Display mode: disabled, verbose or minimal.
    #[arg(long, global = true, default_value = "verbose")]
    mode: DisplayMode,
    /// User role: admin, publisher, regular or none.
    #[arg(long, global = true, default_value = "none")]
    role: UserRole,
    /// Absolute URL the shell starts at.
    #[arg(long, global = true, value_name = "URL")]
    location: Option<String>,
    /// Base URL of the sign-in site.
    #[arg(long, global = true, value_name = "URL")]
    auth_url: Option<String>,
}

impl ShellArgs {
    fn config(&self) -> NavConfig {
        NavConfig::from_env()
            .with_menu_path(self.menu.clone())
            .with_location(self.location.clone())
            .with_auth_base_url(self.auth_url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.shell.config();

    match cli.command {
        None => {
            init_file_tracing();
            let service = load_service(&config)?;
            let preferences = UserPreferences::new().unwrap_or_else(|error| {
                tracing::warn!(%error, "Preferences unavailable; theme choices will not be saved");
                UserPreferences::ephemeral()
            });
            navrail_tui::run(config, service, Arc::new(preferences), cli.shell.mode, cli.shell.role).await
        }
        Some(Command::ViewModel) => {
            init_stderr_tracing();
            let service = load_service(&config)?;
            let view_model = first_view_model(service, &config, cli.shell.mode, cli.shell.role).await?;
            println!("{}", serde_json::to_string_pretty(&view_model)?);
            Ok(())
        }
        Some(Command::LoginUrl) => {
            init_stderr_tracing();
            println!("{}", config.initial_location().login_url(&config.auth_base_url));
            Ok(())
        }
    }
}

fn load_service(config: &NavConfig) -> Result<Arc<dyn NavigationalListService>> {
    let source = StaticMenuSource::load(config.menu_path.as_deref()).context("failed to load the menu catalog")?;
    Ok(Arc::new(source))
}

async fn first_view_model(
    service: Arc<dyn NavigationalListService>,
    config: &NavConfig,
    mode: DisplayMode,
    role: UserRole,
) -> Result<ViewModel> {
    let (_composer, mut view_models) = ViewModelComposer::spawn(service, config.subtype.clone(), mode, role);
    tokio::time::timeout(VIEW_MODEL_TIMEOUT, view_models.recv())
        .await
        .context("timed out waiting for menu data")?
        .context("menu service closed before producing a view-model")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn log_file_path() -> PathBuf {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| navrail_config_dir().join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// The interactive shell owns the terminal, so logs go to a file. Runs before
/// the terminal is set up, so a failure can still be reported on stderr.
fn init_file_tracing() {
    let path = log_file_path();
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("navrail: logging disabled, cannot open {}: {error}", path.display());
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_launch_the_shell_in_verbose_anonymous_mode() {
        let cli = Cli::try_parse_from(["navrail"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.shell.mode, DisplayMode::Verbose);
        assert_eq!(cli.shell.role, UserRole::None);
    }

    #[test]
    fn flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from(["navrail", "view-model", "--mode", "minimal", "--role", "admin"]).expect("parse");
        assert!(matches!(cli.command, Some(Command::ViewModel)));
        assert_eq!(cli.shell.mode, DisplayMode::Minimal);
        assert_eq!(cli.shell.role, UserRole::Admin);
    }

    #[test]
    fn rejects_unknown_roles() {
        assert!(Cli::try_parse_from(["navrail", "--role", "owner"]).is_err());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::try_parse_from(["navrail", "login-url", "--auth-url", "https://auth.example.com", "--location", "https://app.example.com/x"])
            .expect("parse");
        let config = cli.shell.config();
        assert_eq!(config.auth_base_url, "https://auth.example.com");
        assert_eq!(
            config.initial_location().login_url(&config.auth_base_url),
            "https://auth.example.com?redirect=https%3A%2F%2Fapp.example.com%2Fx"
        );
    }

    #[test]
    fn log_file_is_created_with_missing_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(LOG_FILE_NAME);
        open_log_file(&path).expect("open log file");
        assert!(path.is_file());
    }

    #[test]
    fn unopenable_log_file_reports_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").expect("write blocker");
        assert!(open_log_file(&blocker.join(LOG_FILE_NAME)).is_err());
    }

    #[tokio::test]
    async fn view_model_subcommand_resolves_embedded_menu() {
        let config = NavConfig::default();
        let service = load_service(&config).expect("embedded menu");
        let view_model = first_view_model(service, &config, DisplayMode::Minimal, UserRole::None).await.expect("view-model");
        assert_eq!(view_model.mode, DisplayMode::Minimal);
        assert!(!view_model.menu_items.is_empty());
    }
}

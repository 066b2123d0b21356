//! Hands a URL to the platform's default browser.

use std::env;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Command used instead of the platform opener when set.
pub const BROWSER_ENV: &str = "NAVRAIL_BROWSER";

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Spawns the opener for `url` without waiting for it to finish.
pub fn open_external(url: &str) -> Result<(), BrowserError> {
    let (program, args) = opener_command();
    Command::new(&program)
        .args(launch_args(args, url))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|source| BrowserError::Launch { program, source })
}

fn opener_command() -> (String, Vec<String>) {
    if let Ok(custom) = env::var(BROWSER_ENV) {
        let mut parts = custom.split_whitespace().map(str::to_string);
        if let Some(program) = parts.next() {
            return (program, parts.collect());
        }
    }
    platform_opener(env::consts::OS)
}

/// Default opener for `os`. The URL must reach the opener as one argument,
/// so Windows uses `rundll32`; `cmd` treats `&` as a command separator.
fn platform_opener(os: &str) -> (String, Vec<String>) {
    match os {
        "macos" => ("open".into(), Vec::new()),
        "windows" => ("rundll32".into(), vec!["url.dll,FileProtocolHandler".into()]),
        _ => ("xdg-open".into(), Vec::new()),
    }
}

/// Full argument vector handed to the opener for `url`.
fn launch_args(mut args: Vec<String>, url: &str) -> Vec<String> {
    args.push(url.to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_splits_program_and_args() {
        temp_env::with_var(BROWSER_ENV, Some("firefox --new-tab"), || {
            let (program, args) = opener_command();
            assert_eq!(program, "firefox");
            assert_eq!(args, vec!["--new-tab".to_string()]);
        });
    }

    #[test]
    fn windows_passes_the_url_as_one_argument() {
        let url = "https://a.io/login?c=nav&redirect=https%3A%2F%2Fapp.example.com%2F";
        let (program, args) = platform_opener("windows");
        assert_eq!(program, "rundll32");
        assert_eq!(launch_args(args, url), vec!["url.dll,FileProtocolHandler".to_string(), url.to_string()]);
    }

    #[test]
    fn unix_platforms_use_their_native_opener() {
        assert_eq!(platform_opener("macos").0, "open");
        assert_eq!(platform_opener("linux"), ("xdg-open".to_string(), Vec::new()));
    }

    #[test]
    fn missing_program_reports_launch_error() {
        temp_env::with_var(BROWSER_ENV, Some("navrail-definitely-missing-opener"), || {
            let error = open_external("https://example.com").expect_err("spawn should fail");
            assert!(error.to_string().contains("navrail-definitely-missing-opener"));
        });
    }
}

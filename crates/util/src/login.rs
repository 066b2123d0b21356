//! Sign-in redirect construction.
//!
//! The sign-in call to action sends the browsing context to the external
//! authentication site, carrying the page the user was on as a percent-encoded
//! `redirect` query parameter so the auth site can send them back.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Authentication site used when no override is configured.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth.ngx-workshop.io";

/// Return URL used when the current location is unknown.
pub const FALLBACK_RETURN_URL: &str = "/";

/// Characters left unescaped by a URI component encoder: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the sign-in URL for `base`, appending `current_href` as the
/// `redirect` parameter. A missing location falls back to `/`.
///
/// The separator is `&` when `base` already carries a query string and `?`
/// otherwise.
pub fn build_login_url(base: &str, current_href: Option<&str>) -> String {
    let href = current_href.filter(|href| !href.trim().is_empty()).unwrap_or(FALLBACK_RETURN_URL);
    let redirect = utf8_percent_encode(href, URI_COMPONENT);
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}redirect={redirect}")
}

/// The shell's notion of "where the user currently is".
///
/// Holds an absolute URL when the host supplied one; navigation joins route
/// paths onto it. Without an origin the location is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    current: Option<Url>,
}

impl Location {
    pub fn new(current: Option<Url>) -> Self {
        Self { current }
    }

    /// Parses an absolute URL; anything unparsable yields an unknown location.
    pub fn parse(href: &str) -> Self {
        match Url::parse(href.trim()) {
            Ok(url) => Self::new(Some(url)),
            Err(error) => {
                tracing::warn!(href, %error, "Ignoring unparsable location");
                Self::default()
            }
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.current.as_ref().map(Url::as_str)
    }

    /// Current path, or `/` when the location is unknown.
    pub fn path(&self) -> &str {
        self.current.as_ref().map(Url::path).unwrap_or(FALLBACK_RETURN_URL)
    }

    /// Moves the location to an absolute route path, dropping query and fragment.
    pub fn navigate(&mut self, route_path: &str) {
        if let Some(current) = self.current.as_ref() {
            match current.join(route_path) {
                Ok(next) => self.current = Some(next),
                Err(error) => tracing::warn!(route_path, %error, "Unable to resolve route against current location"),
            }
        }
    }

    /// Sign-in URL returning to this location.
    pub fn login_url(&self, base: &str) -> String {
        build_login_url(base, self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_current_location_as_redirect() {
        let url = build_login_url("https://auth.ngx-workshop.io", Some("https://app.example.com/foo?x=1"));
        assert_eq!(url, "https://auth.ngx-workshop.io?redirect=https%3A%2F%2Fapp.example.com%2Ffoo%3Fx%3D1");
    }

    #[test]
    fn appends_with_ampersand_when_base_has_query() {
        let url = build_login_url("https://auth.example.com/login?client=nav", Some("https://app.example.com/"));
        assert_eq!(url, "https://auth.example.com/login?client=nav&redirect=https%3A%2F%2Fapp.example.com%2F");
    }

    #[test]
    fn missing_location_falls_back_to_root() {
        assert_eq!(build_login_url(DEFAULT_AUTH_BASE_URL, None), "https://auth.ngx-workshop.io?redirect=%2F");
        assert_eq!(build_login_url(DEFAULT_AUTH_BASE_URL, Some("  ")), "https://auth.ngx-workshop.io?redirect=%2F");
    }

    #[test]
    fn keeps_uri_component_safe_characters() {
        let url = build_login_url("https://a.io", Some("a-b_c.d!e~f*g'h(i)j k"));
        assert_eq!(url, "https://a.io?redirect=a-b_c.d!e~f*g'h(i)j%20k");
    }

    #[test]
    fn location_navigation_replaces_path_and_query() {
        let mut location = Location::parse("https://app.example.com/foo?x=1");
        location.navigate("/angular/signals");
        assert_eq!(location.href(), Some("https://app.example.com/angular/signals"));
        assert_eq!(location.path(), "/angular/signals");
    }

    #[test]
    fn unknown_location_stays_unknown() {
        let mut location = Location::parse("not a url");
        location.navigate("/docs");
        assert_eq!(location.href(), None);
        assert_eq!(location.path(), "/");
        assert_eq!(location.login_url("https://a.io"), "https://a.io?redirect=%2F");
    }
}

//! Runtime configuration.
//!
//! Defaults suit a local development server; each value can be overridden
//! from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ADMIN_BASE_URL` | `http://127.0.0.1:8000` |
//! | `ADMIN_CSRF_COOKIE` | `csrftoken` |
//! | `ADMIN_REQUEST_TIMEOUT_SECS` | `30` |
//! | `ADMIN_ACTOR_BUFFER` | `32` |
//!
//! Values that do not parse are ignored with a warning.

use crate::editor::context::CSRF_COOKIE;
use crate::editor::TransportError;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Origin of the admin server.
    pub base_url: String,
    /// Name of the anti-forgery cookie.
    pub csrf_cookie: String,
    pub request_timeout: Duration,
    /// Request channel capacity of each view actor.
    pub actor_buffer: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_cookie: CSRF_COOKIE.to_string(),
            request_timeout: Duration::from_secs(30),
            actor_buffer: 32,
        }
    }
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("ADMIN_BASE_URL") {
            match Url::parse(&raw) {
                Ok(_) => config.base_url = raw,
                Err(e) => warn!(
                    key = "ADMIN_BASE_URL",
                    value = %raw,
                    error = %e,
                    "Ignoring invalid value"
                ),
            }
        }
        if let Some(raw) = lookup("ADMIN_CSRF_COOKIE").filter(|v| !v.trim().is_empty()) {
            config.csrf_cookie = raw.trim().to_string();
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "ADMIN_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(buffer) = parse_var::<usize>(&lookup, "ADMIN_ACTOR_BUFFER").filter(|b| *b > 0) {
            config.actor_buffer = buffer;
        }
        config
    }

    pub fn origin(&self) -> Result<Url, TransportError> {
        Url::parse(&self.base_url).map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring invalid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AdminConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.origin().unwrap().as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn test_overrides() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("ADMIN_BASE_URL", "https://shop.example"),
            ("ADMIN_CSRF_COOKIE", "token"),
            ("ADMIN_REQUEST_TIMEOUT_SECS", "5"),
            ("ADMIN_ACTOR_BUFFER", "8"),
        ]));
        assert_eq!(config.base_url, "https://shop.example");
        assert_eq!(config.csrf_cookie, "token");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.actor_buffer, 8);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("ADMIN_BASE_URL", "not a url"),
            ("ADMIN_REQUEST_TIMEOUT_SECS", "soon"),
            ("ADMIN_ACTOR_BUFFER", "0"),
        ]));
        assert_eq!(config, AdminConfig::default());
    }
}

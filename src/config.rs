//! Configuration
//!
//! Backend base-URL resolution: one environment override, else a
//! hardcoded local default.

use std::env;

/// Environment variable overriding the backend base URL
pub const BASE_URL_VAR: &str = "SYNCBOARD_API_URL";

/// Default backend when no override is set (local dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base URL without a trailing slash, e.g. `http://localhost:5000`
    pub base_url: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let base_url = match env::var(BASE_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => {
                log::info!("using backend from {BASE_URL_VAR}: {value}");
                value
            }
            _ => {
                log::info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
        };
        Self::with_base_url(base_url)
    }

    /// Build a configuration pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(Config::default().base_url, "http://localhost:5000");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::with_base_url("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_env_override_wins_and_falls_back() {
        // Both branches in one test so parallel tests never race on the var
        env::set_var(BASE_URL_VAR, "http://tracker.internal:8080");
        assert_eq!(
            Config::from_env().base_url,
            "http://tracker.internal:8080"
        );

        env::remove_var(BASE_URL_VAR);
        assert_eq!(Config::from_env().base_url, DEFAULT_BASE_URL);
    }
}

// src/config.rs

//! Application configuration structures.
//!
//! Loaded from a TOML file with serde defaults, so a missing or partial
//! file still yields a working configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source API endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.users_url.trim().is_empty() {
            return Err(AppError::config("api.users_url is empty"));
        }
        if self.api.posts_url.trim().is_empty() {
            return Err(AppError::config("api.posts_url is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Source API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint serving the user collection
    #[serde(default = "defaults::users_url")]
    pub users_url: String,

    /// Endpoint serving the post collection
    #[serde(default = "defaults::posts_url")]
    pub posts_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            users_url: defaults::users_url(),
            posts_url: defaults::posts_url(),
        }
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Serde default values.
mod defaults {
    pub fn users_url() -> String {
        "https://jsonplaceholder.typicode.com/users".to_string()
    }

    pub fn posts_url() -> String {
        "https://jsonplaceholder.typicode.com/posts".to_string()
    }

    pub fn user_agent() -> String {
        format!("insights/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        30
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.api.users_url.ends_with("/users"));
        assert!(config.api.posts_url.ends_with("/posts"));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            users_url = "https://example.com/people"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.users_url, "https://example.com/people");
        assert!(config.api.posts_url.ends_with("/posts"));
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = Config::default();
        config.api.posts_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nuser_agent = \"test-agent\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.user_agent, "test-agent");
        assert_eq!(config.http.timeout_secs, 5);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert!(config.validate().is_ok());
    }
}

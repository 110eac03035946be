//! School-administration server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "rehome/0.1".to_string()
}

/// How the updated record is encoded in the update request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    /// `application/x-www-form-urlencoded`, one pair per record field.
    #[default]
    Form,
    /// `application/json`, the record object as-is.
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Root URL of the service (e.g., `https://central.example.org`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to each request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub payload: PayloadEncoding,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            payload: PayloadEncoding::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without surrounding whitespace or a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Check the fields a client cannot work without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or non-HTTP base URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "server.base_url".into(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.payload, PayloadEncoding::Form);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ServerConfig {
            base_url: "https://central.example.org/".into(),
            ..ServerConfig::default()
        };
        assert_eq!(config.base_url(), "https://central.example.org");
    }

    #[test]
    fn base_url_ignores_surrounding_whitespace() {
        let config = ServerConfig {
            base_url: "  https://central.example.org/ \n".into(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), "https://central.example.org");
    }

    #[test]
    fn validate_rejects_relative_url() {
        let config = ServerConfig {
            base_url: "/schools".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "server.base_url"
        ));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = ServerConfig {
            timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

//! # rehome-config
//!
//! Layered configuration loading for rehome using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REHOME_*` prefix, `__` as separator)
//! 2. Project-level `.rehome/config.toml`
//! 3. User-level `~/.config/rehome/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REHOME_SERVER__BASE_URL` -> `server.base_url`,
//! `REHOME_GENERAL__IN_FLIGHT` -> `general.in_flight`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rehome_config::RehomeConfig;
//!
//! let config = RehomeConfig::load_with_dotenv().expect("config");
//! println!("server: {}", config.server.base_url());
//! ```

mod error;
mod general;
mod server;

pub use error::ConfigError;
pub use general::{GeneralConfig, InFlightPolicy};
pub use server::{PayloadEncoding, ServerConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RehomeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RehomeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// server section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.server.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".rehome/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("REHOME_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rehome").join("config.toml"))
    }
}

//! # rehome-client
//!
//! HTTP client for the school-administration service, plus the migration
//! trigger that moves a school to another district:
//! - [`SchoolsClient`]: `GET /schools/{id}` and `POST /schools/{id}/update`
//! - [`SchoolStore`]: the seam between the trigger and the transport
//! - [`MigrationTrigger`]: fetch, reassign, submit, confirm

mod error;
mod http;
mod schools;
pub mod store;
pub mod trigger;

pub use error::ClientError;
pub use store::SchoolStore;
pub use trigger::{MigrationTrigger, TriggerError};

use rehome_config::{PayloadEncoding, ServerConfig};

/// HTTP client for the school service.
#[derive(Debug, Clone)]
pub struct SchoolsClient {
    http: reqwest::Client,
    base_url: String,
    payload: PayloadEncoding,
}

impl SchoolsClient {
    /// Build a client from the `[server]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            payload: config.payload,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn payload(&self) -> PayloadEncoding {
        self.payload
    }
}

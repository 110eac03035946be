//! Outcomes of a migration attempt and of its two requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::SchoolRecord;

/// Result of `GET /schools/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Found(SchoolRecord),
    NotFound,
}

/// Result of `POST /schools/{id}/update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Updated {
    /// 2xx with the response body as text. An empty body still means the
    /// school was not found.
    Accepted(String),
    NotFound,
}

impl Updated {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Accepted(body) if !body.is_empty())
    }
}

/// What one activation of the migration trigger ended in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// The server accepted the update; `message` was shown.
    Migrated { message: String },
    /// Read or write reported the school as missing. Nothing was shown.
    NotFound,
    /// Another activation was still in flight and the policy rejects overlap.
    Busy,
}

impl MigrationOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Migrated { .. } => "migrated",
            Self::NotFound => "not_found",
            Self::Busy => "busy",
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Migrated { message } => Some(message),
            Self::NotFound | Self::Busy => None,
        }
    }
}

impl fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

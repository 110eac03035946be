//! Cross-cutting error types for rehome.
//!
//! Transport errors live in `rehome-client`; a unified error is deferred to
//! `rehome-cli` where all crate errors converge.

use thiserror::Error;

/// Errors raised while handling selections and school records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The fetched representation is not a JSON object.
    #[error("School record is not a JSON object (got {kind})")]
    NotAnObject { kind: &'static str },

    /// The fetched representation has no district reference to overwrite.
    #[error("School record {school_id} has no '{field}' field")]
    MissingField { school_id: String, field: String },

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

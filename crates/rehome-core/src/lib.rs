//! # rehome-core
//!
//! Core types and error types for rehome.
//!
//! This crate provides the types shared across all rehome crates:
//! - Identifier newtypes and the user's [`entities::Selection`]
//! - The transient [`record::SchoolRecord`] that is fetched, edited, and sent back
//! - Migration outcomes and CLI response types
//! - The [`sink::MessageSink`] output seam
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod outcome;
pub mod record;
pub mod responses;
pub mod sink;

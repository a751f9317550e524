//! Errors raised while defining a transition table.

use thiserror::Error;

/// Errors that can occur when declaring or loading a transition table.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// A rule for this (event, source state) pair already exists
    #[error("key = {key} : duplicated transition")]
    DuplicateRule { key: String },

    /// The table definition could not be read or written as JSON
    #[error("Table definition JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

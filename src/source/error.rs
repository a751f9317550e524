//! State source error types.

use thiserror::Error;

/// Errors that can occur when fetching an entity from a state source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// No entity is stored under this identifier
    #[error("Entity {id} not found")]
    NotFound { id: String },
}

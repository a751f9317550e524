//! Transition table construction.
//!
//! This module provides the fluent declaration API for transition tables,
//! serializable table definitions and the `label_enum!` macro for label
//! types with minimal boilerplate.

pub mod definition;
pub mod error;
pub mod macros;
pub mod transitions;

pub use definition::TableDefinition;
pub use error::DefinitionError;
pub use transitions::TransitionTable;

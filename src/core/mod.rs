//! Core label and rule types.
//!
//! This module contains the vocabulary every other module is written in:
//! - Event and state labels via the `Label` trait
//! - Transition rules (event, source, destination)

mod label;
mod rule;

pub use label::Label;
pub use rule::Rule;

pub(crate) use rule::RuleKey;

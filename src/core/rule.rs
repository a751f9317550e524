//! Transition rules and their lookup keys.

use super::label::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup key of a rule: the event together with the state it fires from.
///
/// A table holds at most one rule per key.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct RuleKey<E, S> {
    pub(crate) event: E,
    pub(crate) src: S,
}

impl<E: Label, S: Label> fmt::Display for RuleKey<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{event: {}, requiredState: {}}}",
            self.event.name(),
            self.src.name()
        )
    }
}

/// A declared transition: `event` moves a machine from `src` to `dest`.
///
/// Rules are the serialized form of a table definition and the items
/// yielded by [`TransitionTable::rules`](crate::table::TransitionTable::rules).
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Rule;
///
/// let rule = Rule::new("Order.Placed", "AwaitingPayment", "Confirmed");
/// assert_eq!(rule.to_string(), "AwaitingPayment --> |Order.Placed| Confirmed");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rule<E, S> {
    /// The triggering event
    pub event: E,
    /// The state the event must find the machine in
    pub src: S,
    /// The state the machine moves to
    pub dest: S,
}

impl<E, S> Rule<E, S> {
    pub fn new(event: E, src: S, dest: S) -> Self {
        Self { event, src, dest }
    }
}

impl<E: Label, S: Label> fmt::Display for Rule<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> |{}| {}",
            self.src.name(),
            self.event.name(),
            self.dest.name()
        )
    }
}

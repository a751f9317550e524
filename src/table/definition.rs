//! Serializable table definitions.
//!
//! A [`TableDefinition`] is the data form of a transition table: a start
//! state plus its rules in declaration order. It lets a table be kept in a
//! JSON file and loaded at startup instead of being declared in code.

use crate::core::{Label, Rule};
use crate::table::error::DefinitionError;
use crate::table::transitions::TransitionTable;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Start state and ordered rules of a transition table.
///
/// # Example
///
/// ```rust
/// use fsm_table::table::TableDefinition;
///
/// let json = r#"{
///     "start": "AwaitingPayment",
///     "rules": [
///         { "event": "Order.Placed", "src": "AwaitingPayment", "dest": "Confirmed" }
///     ]
/// }"#;
///
/// let table = TableDefinition::<String, String>::from_json(json)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition<E, S> {
    pub start: S,
    #[serde(default = "Vec::new")]
    pub rules: Vec<Rule<E, S>>,
}

impl<E: Label, S: Label> TableDefinition<E, S> {
    pub fn new(start: S) -> Self {
        Self {
            start,
            rules: Vec::new(),
        }
    }

    /// Append a rule; duplicates are only detected by [`build`](Self::build).
    pub fn rule(mut self, event: E, src: S, dest: S) -> Self {
        self.rules.push(Rule::new(event, src, dest));
        self
    }

    /// Declare every rule in order on a fresh table.
    /// Returns an error on the first duplicated (event, source) pair.
    pub fn build(self) -> Result<TransitionTable<E, S>, DefinitionError> {
        self.rules
            .into_iter()
            .try_fold(TransitionTable::new(self.start), |table, rule| {
                table.try_declare(rule.event, rule.src, rule.dest)
            })
    }
}

impl<E, S> TableDefinition<E, S>
where
    E: Label + DeserializeOwned,
    S: Label + DeserializeOwned,
{
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<E, S> TableDefinition<E, S>
where
    E: Label + Serialize,
    S: Label + Serialize,
{
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<E: Label, S: Label> TransitionTable<E, S> {
    /// Snapshot this table as a definition, rules in declaration order.
    pub fn definition(&self) -> TableDefinition<E, S> {
        TableDefinition {
            start: self.start_state().clone(),
            rules: self
                .rules()
                .map(|(event, src, dest)| Rule::new(event.clone(), src.clone(), dest.clone()))
                .collect(),
        }
    }
}

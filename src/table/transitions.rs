//! The transition table and its fluent declaration API.

use crate::core::{Label, RuleKey};
use crate::machine::Machine;
use crate::source::Stateful;
use crate::table::error::DefinitionError;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Immutable-after-build lookup structure of transition rules.
///
/// A table is declared once, usually into a `static`, and then shared by
/// any number of [`Machine`] instances. Declaration consumes and returns the
/// table by value, so once it is borrowed by an instance it can no longer
/// change.
///
/// # Example
///
/// ```rust
/// use fsm_table::TransitionTable;
///
/// let table = TransitionTable::new("AwaitingPayment")
///     .declare("Order.Placed", "AwaitingPayment", "Confirmed")
///     .declare("Order.Shipped", "Confirmed", "Shipped");
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.states(), vec!["AwaitingPayment", "Confirmed", "Shipped"]);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<E, S> {
    start: S,
    transitions: HashMap<RuleKey<E, S>, S>,
    sequence: Vec<RuleKey<E, S>>,
    states: Vec<S>,
    known: HashSet<S>,
}

impl<E: Label, S: Label> TransitionTable<E, S> {
    /// Create an empty table whose only known state is `start`.
    pub fn new(start: S) -> Self {
        let mut known = HashSet::new();
        known.insert(start.clone());

        Self {
            states: vec![start.clone()],
            start,
            transitions: HashMap::new(),
            sequence: Vec::new(),
            known,
        }
    }

    /// Declare that `event` moves the machine from `src` to `dest`.
    ///
    /// `src --> |event| dest`
    ///
    /// # Panics
    ///
    /// Panics if a rule for the same `event` and `src` was already declared.
    /// A duplicate is a defect in the static definition of the machine, so
    /// the program must not start with it. Use [`try_declare`] when the
    /// rules come from data.
    ///
    /// [`try_declare`]: TransitionTable::try_declare
    pub fn declare(self, event: E, src: S, dest: S) -> Self {
        match self.try_declare(event, src, dest) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`declare`](TransitionTable::declare).
    ///
    /// Returns [`DefinitionError::DuplicateRule`] instead of panicking.
    pub fn try_declare(mut self, event: E, src: S, dest: S) -> Result<Self, DefinitionError> {
        let key = RuleKey { event, src };
        if self.transitions.contains_key(&key) {
            return Err(DefinitionError::DuplicateRule {
                key: key.to_string(),
            });
        }

        trace!(
            event = key.event.name(),
            src = key.src.name(),
            dest = dest.name(),
            "declared transition"
        );

        self.remember(key.src.clone());
        self.remember(dest.clone());
        self.sequence.push(key.clone());
        self.transitions.insert(key, dest);
        Ok(self)
    }

    fn remember(&mut self, state: S) {
        if self.known.insert(state.clone()) {
            self.states.push(state);
        }
    }

    /// Every state mentioned as start, source or destination.
    ///
    /// The start state comes first; the rest follow in the order they were
    /// first mentioned. No state appears twice.
    pub fn states(&self) -> Vec<S> {
        self.states.clone()
    }

    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// Declared rules as `(event, src, dest)`, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&E, &S, &S)> + '_ {
        self.sequence.iter().map(move |key| {
            // Every sequenced key was inserted alongside its destination.
            let dest = &self.transitions[key];
            (&key.event, &key.src, dest)
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Destination of the rule for `event` fired from `src`, if declared.
    pub fn destination(&self, event: &E, src: &S) -> Option<&S> {
        let key = RuleKey {
            event: event.clone(),
            src: src.clone(),
        };
        self.transitions.get(&key)
    }

    /// Check whether any rule, from any source state, handles `event`.
    pub fn contains_event(&self, event: &E) -> bool {
        self.first_source_for(event).is_some()
    }

    /// Source state of the earliest declared rule for `event`.
    pub(crate) fn first_source_for(&self, event: &E) -> Option<&S> {
        self.sequence
            .iter()
            .find(|key| key.event == *event)
            .map(|key| &key.src)
    }

    /// Machine instance positioned at the start state.
    pub fn machine(&self) -> Machine<'_, E, S> {
        Machine::new(self, self.start.clone())
    }

    /// Machine instance positioned at the entity's current state.
    pub fn machine_for<T: Stateful<S>>(&self, entity: &T) -> Machine<'_, E, S> {
        Machine::new(self, entity.current_state())
    }
}

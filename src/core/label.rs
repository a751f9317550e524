//! The `Label` trait shared by events and states.
//!
//! Events and states are opaque to the machine: it only compares them,
//! hashes them and asks for a name when rendering errors or diagrams.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for event and state labels.
///
/// A label identifies either a trigger (an event such as `"Order.Placed"`)
/// or a position in the machine (a state such as `"Confirmed"`). Labels are
/// used as hash-map keys, so equality and hashing must agree. No ordering is
/// required.
///
/// # Required Traits
///
/// - `Clone`: instances copy their current state when derived
/// - `Eq` + `Hash`: labels key the transition table
/// - `Debug`: labels are debuggable for diagnostics
/// - `Send` + `Sync`: tables are shared across threads
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Label;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl Label for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// assert_eq!("Door.Opened".name(), "Door.Opened");
/// ```
pub trait Label: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the label's name for messages and graph export.
    fn name(&self) -> &str;
}

impl Label for String {
    fn name(&self) -> &str {
        self
    }
}

impl Label for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl Label for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn label_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn string_labels_name_themselves() {
        let owned = String::from("Order.Shipped");
        assert_eq!(owned.name(), "Order.Shipped");
        assert_eq!("Order.Placed".name(), "Order.Placed");
    }

    #[test]
    fn labels_dedupe_in_hash_sets() {
        let set: HashSet<TestState> = [
            TestState::Initial,
            TestState::Processing,
            TestState::Initial,
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
    }
}

//! fsm-table: declarative transition tables for finite state machines
//!
//! A transition table is declared once, at startup, as a fixed set of
//! `(event, source state) -> destination state` rules. Machine instances
//! borrow the table, carry their own current state, and dispatch events
//! against it, rejecting any event/state combination that was not declared.
//!
//! # Core Concepts
//!
//! - **Labels**: Events and states are opaque values implementing `Label`
//! - **Transition Table**: Declared rules, read-only once built; duplicate
//!   rules panic at declaration time
//! - **Machine**: A cheap (table, current state) pair; deriving one at
//!   another state never touches the table
//! - **Graph Export**: Mermaid flowchart text in declaration order
//!
//! # Example
//!
//! ```rust
//! use fsm_table::{label_enum, DispatchError, TransitionTable};
//!
//! label_enum! {
//!     enum OrderEvent {
//!         Placed => "Order.Placed",
//!         Shipped => "Order.Shipped",
//!         Refunded => "Order.Refunded",
//!     }
//! }
//!
//! label_enum! {
//!     enum OrderState {
//!         AwaitingPayment,
//!         Confirmed,
//!         Shipped,
//!     }
//! }
//!
//! let table = TransitionTable::new(OrderState::AwaitingPayment)
//!     .declare(OrderEvent::Placed, OrderState::AwaitingPayment, OrderState::Confirmed)
//!     .declare(OrderEvent::Shipped, OrderState::Confirmed, OrderState::Shipped);
//!
//! let mut order = table.machine().derive_at(OrderState::Confirmed);
//! let shipped: Result<(), DispatchError<_, _>> = order.act(OrderEvent::Shipped, |next| {
//!     assert_eq!(next, &OrderState::Shipped);
//!     Ok(())
//! });
//! assert!(shipped.is_ok());
//!
//! let refund = order.resolve(OrderEvent::Refunded);
//! assert!(matches!(refund, Err(DispatchError::EventNotDefined { .. })));
//! ```

extern crate self as fsm_table;

pub mod core;
pub mod graph;
pub mod machine;
pub mod source;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Label, Rule};
pub use machine::{DispatchError, Machine};
pub use source::{MemoryStateSource, SourceError, StateSource, Stateful};
pub use table::{DefinitionError, TableDefinition, TransitionTable};

// Used by `label_enum!` so callers need no serde dependency of their own
#[doc(hidden)]
pub use serde;

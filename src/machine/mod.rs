//! Dispatching events against a transition table.
//!
//! A [`Machine`] pairs a borrowed [`TransitionTable`](crate::table::TransitionTable)
//! with its own current state. Dispatch resolves one event in three ways:
//!
//! - **Exact match**: the (event, current state) rule exists; the state moves
//!   and the caller's effect runs with the destination
//! - **State mismatch**: the event is declared, but not from this state
//! - **Unknown event**: no rule mentions the event at all
//!
//! Only the first case changes the current state.

mod error;
mod instance;

pub use error::DispatchError;
pub use instance::Machine;

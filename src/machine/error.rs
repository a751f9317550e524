//! Dispatch errors.

use crate::core::Label;
use thiserror::Error;

/// Reasons an event could not be dispatched from the current state.
///
/// Neither variant changes the machine's current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError<E: Label, S: Label> {
    /// No rule for this event exists from any state
    #[error("event {} is not defined", .event.name())]
    EventNotDefined { event: E },

    /// The event is declared, but not from the current state.
    /// `required` is the source of the earliest declared rule for the event.
    #[error(
        "event {} requires state {} but current state is {}",
        .event.name(),
        .required.name(),
        .current.name()
    )]
    StateNotMatch { event: E, required: S, current: S },
}

impl<E: Label, S: Label> DispatchError<E, S> {
    /// The event that could not be dispatched.
    pub fn event(&self) -> &E {
        match self {
            Self::EventNotDefined { event } | Self::StateNotMatch { event, .. } => event,
        }
    }
}

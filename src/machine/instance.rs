//! Machine instances that dispatch events against a shared table.

use crate::core::Label;
use crate::machine::error::DispatchError;
use crate::table::TransitionTable;
use tracing::debug;

/// A (table, current state) pair used to attempt dispatches.
///
/// The table is borrowed, never copied: deriving an instance at another
/// state clones only the state label. Instances are meant to be created
/// per operation and dropped afterwards.
#[derive(Clone, Debug)]
pub struct Machine<'t, E, S> {
    table: &'t TransitionTable<E, S>,
    current: S,
}

impl<'t, E: Label, S: Label> Machine<'t, E, S> {
    pub(crate) fn new(table: &'t TransitionTable<E, S>, current: S) -> Self {
        Self { table, current }
    }

    /// New instance on the same table, positioned at `required`.
    ///
    /// `self` is left untouched. `required` does not have to be a state
    /// the table mentions; dispatching from an unknown state simply finds
    /// no exact rule.
    pub fn derive_at(&self, required: S) -> Machine<'t, E, S> {
        Machine::new(self.table, required)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn table(&self) -> &'t TransitionTable<E, S> {
        self.table
    }

    /// Dispatch `event` and run `effect` with the destination state.
    ///
    /// On an exact (event, current state) match the current state moves to
    /// the destination first, then `effect` runs once and its result is
    /// returned unchanged. If the effect fails the state change stays;
    /// derive a fresh instance per attempt to discard it.
    ///
    /// Dispatch failures leave the current state as it was and are
    /// converted into the caller's error type through `From`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::{DispatchError, TransitionTable};
    ///
    /// let table = TransitionTable::new("Confirmed")
    ///     .declare("Order.Shipped", "Confirmed", "Shipped");
    ///
    /// let mut machine = table.machine();
    /// let shipped: Result<&str, DispatchError<&str, &str>> =
    ///     machine.act("Order.Shipped", |next| Ok(*next));
    ///
    /// assert_eq!(shipped, Ok("Shipped"));
    /// assert_eq!(machine.current_state(), &"Shipped");
    /// ```
    pub fn act<T, X, F>(&mut self, event: E, effect: F) -> Result<T, X>
    where
        F: FnOnce(&S) -> Result<T, X>,
        X: From<DispatchError<E, S>>,
    {
        let dest = self.resolve(event)?;
        effect(&dest)
    }

    /// Move to the destination of `event` without running an effect.
    pub fn resolve(&mut self, event: E) -> Result<S, DispatchError<E, S>> {
        let table = self.table;
        let Some(dest) = table.destination(&event, &self.current) else {
            return Err(self.reject(event));
        };

        debug!(
            event = event.name(),
            from = self.current.name(),
            to = dest.name(),
            "transition resolved"
        );
        self.current = dest.clone();
        Ok(dest.clone())
    }

    fn reject(&self, event: E) -> DispatchError<E, S> {
        match self.table.first_source_for(&event) {
            Some(required) => {
                debug!(
                    event = event.name(),
                    required = required.name(),
                    current = self.current.name(),
                    "transition rejected: state does not match"
                );
                DispatchError::StateNotMatch {
                    event,
                    required: required.clone(),
                    current: self.current.clone(),
                }
            }
            None => {
                debug!(event = event.name(), "transition rejected: event not defined");
                DispatchError::EventNotDefined { event }
            }
        }
    }

    /// Mermaid top-down graph of the shared table.
    pub fn export_graph(&self) -> String {
        self.table.mermaid()
    }

    /// Mermaid top-down graph with every name passed through `transform`.
    pub fn export_graph_with<F>(&self, transform: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.table.mermaid_with(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_enum;
    use thiserror::Error;

    label_enum! {
        enum Job {
            Queued,
            Running,
            Done,
            Failed,
        }
    }

    label_enum! {
        enum JobEvent {
            Start,
            Finish,
            Crash,
            Archive,
        }
    }

    #[derive(Debug, Error, PartialEq)]
    enum JobError {
        #[error(transparent)]
        Dispatch(#[from] DispatchError<JobEvent, Job>),
        #[error("worker unavailable")]
        WorkerUnavailable,
    }

    fn jobs() -> TransitionTable<JobEvent, Job> {
        TransitionTable::new(Job::Queued)
            .declare(JobEvent::Start, Job::Queued, Job::Running)
            .declare(JobEvent::Finish, Job::Running, Job::Done)
            .declare(JobEvent::Crash, Job::Running, Job::Failed)
    }

    #[test]
    fn act_moves_state_and_runs_effect_once() {
        let table = jobs();
        let mut machine = table.machine();
        let mut seen = Vec::new();

        let result: Result<(), JobError> = machine.act(JobEvent::Start, |next| {
            seen.push(*next);
            Ok(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![Job::Running]);
        assert_eq!(machine.current_state(), &Job::Running);
    }

    #[test]
    fn act_returns_effect_value() {
        let table = jobs();
        let mut machine = table.machine().derive_at(Job::Running);

        let label = machine.act::<_, JobError, _>(JobEvent::Finish, |next| Ok(next.name().len()));

        assert_eq!(label, Ok(4));
    }

    #[test]
    fn effect_error_passes_through_and_keeps_new_state() {
        let table = jobs();
        let mut machine = table.machine();

        let result: Result<(), JobError> =
            machine.act(JobEvent::Start, |_| Err(JobError::WorkerUnavailable));

        assert_eq!(result, Err(JobError::WorkerUnavailable));
        assert_eq!(machine.current_state(), &Job::Running);
    }

    #[test]
    fn wrong_state_is_rejected_without_running_effect() {
        let table = jobs();
        let mut machine = table.machine();
        let mut called = false;

        let result: Result<(), JobError> = machine.act(JobEvent::Finish, |_| {
            called = true;
            Ok(())
        });

        assert_eq!(
            result,
            Err(JobError::Dispatch(DispatchError::StateNotMatch {
                event: JobEvent::Finish,
                required: Job::Running,
                current: Job::Queued,
            }))
        );
        assert!(!called);
        assert_eq!(machine.current_state(), &Job::Queued);
    }

    #[test]
    fn unknown_event_is_rejected() {
        let table = jobs();
        let mut machine = table.machine().derive_at(Job::Done);

        let result = machine.resolve(JobEvent::Archive);

        assert_eq!(
            result,
            Err(DispatchError::EventNotDefined {
                event: JobEvent::Archive
            })
        );
        assert_eq!(machine.current_state(), &Job::Done);
    }

    #[test]
    fn state_not_match_reports_first_declared_source() {
        let table = TransitionTable::new("Shipped")
            .declare("ReturnRequested", "Shipped", "ReturnInProgress")
            .declare("ReturnRequested", "Delivered", "ReturnInProgress");
        let mut machine = table.machine().derive_at("Cancelled");

        let err = machine.resolve("ReturnRequested").unwrap_err();

        assert_eq!(
            err,
            DispatchError::StateNotMatch {
                event: "ReturnRequested",
                required: "Shipped",
                current: "Cancelled",
            }
        );
    }

    #[test]
    fn derive_at_leaves_source_untouched() {
        let table = jobs();
        let base = table.machine();

        let mut running = base.derive_at(Job::Running);
        let failed = base.derive_at(Job::Failed);
        running.resolve(JobEvent::Finish).unwrap();

        assert_eq!(base.current_state(), &Job::Queued);
        assert_eq!(running.current_state(), &Job::Done);
        assert_eq!(failed.current_state(), &Job::Failed);
        assert!(std::ptr::eq(base.table(), running.table()));
    }

    #[test]
    fn terminal_state_has_no_outgoing_rules() {
        let table = jobs();
        let mut machine = table.machine().derive_at(Job::Done);

        assert!(matches!(
            machine.resolve(JobEvent::Start),
            Err(DispatchError::StateNotMatch { .. })
        ));
    }

    #[test]
    fn multi_step_workflow() {
        let table = jobs();
        let mut machine = table.machine();

        machine.resolve(JobEvent::Start).unwrap();
        machine.resolve(JobEvent::Finish).unwrap();

        assert_eq!(machine.current_state(), &Job::Done);
    }
}

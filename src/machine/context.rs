//! Context that drives the state machine.

use crate::core::{transition, Event, State, StateHistory, StateTransition, UnhandledEvent};
use crate::machine::driven::Driven;
use chrono::Utc;

/// Holds the current state and dispatches events to the transition table.
///
/// A context owns its [`Driven`] sink. Pass `&mut sink` to keep ownership
/// and inspect the sink after the context is dropped.
///
/// # Example
///
/// ```rust
/// use state_pattern::{Context, Event, RecordingDriven, State};
///
/// let mut context = Context::new(RecordingDriven::new());
/// assert_eq!(context.current_state(), State::Null);
///
/// context.handle_event(Event::Create).unwrap();
/// context.handle_event(Event::Connect).unwrap();
/// assert_eq!(context.current_state(), State::Ready);
///
/// // Destroy is not accepted while Ready; nothing changes.
/// assert!(context.handle_event(Event::Destroy).is_err());
/// assert_eq!(context.current_state(), State::Ready);
/// ```
pub struct Context<D: Driven> {
    current: State,
    driven: D,
    history: StateHistory,
}

impl<D: Driven> Context<D> {
    /// Create a context in the `Null` state.
    ///
    /// The `Null` entry hook runs once here, since the machine enters its
    /// initial state without leaving another.
    pub fn new(driven: D) -> Self {
        let mut context = Self {
            current: State::Null,
            driven,
            history: StateHistory::new(),
        };
        context.current.enter(&mut context.driven);
        context
    }

    /// Get current state.
    pub fn current_state(&self) -> State {
        self.current
    }

    /// The `Null` state, for naming a target.
    pub fn null_state(&self) -> State {
        State::Null
    }

    /// The `Idle` state, for naming a target.
    pub fn idle_state(&self) -> State {
        State::Idle
    }

    /// The `Ready` state, for naming a target.
    pub fn ready_state(&self) -> State {
        State::Ready
    }

    /// Borrow the action sink.
    pub fn driven(&self) -> &D {
        &self.driven
    }

    /// Mutably borrow the action sink.
    pub fn driven_mut(&mut self) -> &mut D {
        &mut self.driven
    }

    /// Consume the context, returning its sink.
    pub fn into_driven(self) -> D {
        self.driven
    }

    /// Get state switch history.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Forget recorded switches. The current state is unchanged.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check whether `event` would be accepted in the current state.
    pub fn can_handle(&self, event: Event) -> bool {
        self.current.accepts(event)
    }

    /// Switch to `target`, running the exit hook of the old state and the
    /// entry hook of the new one.
    ///
    /// Does nothing when `target` is already current.
    pub fn set_state(&mut self, target: State) {
        self.switch_to(target, None);
    }

    /// Dispatch `event` to the current state.
    ///
    /// On success the old state's exit hook, the new state's entry hook and
    /// then the transition's output action run, in that order, and the new
    /// state is returned. An event with no row for the current state returns
    /// [`UnhandledEvent`] and leaves the context untouched.
    pub fn handle_event(&mut self, event: Event) -> Result<State, UnhandledEvent> {
        let step = transition(self.current, event).inspect_err(|err| {
            tracing::warn!(state = %err.state, event = %err.event, "unhandled event");
        })?;

        self.switch_to(step.to, Some(event));
        if let Some(action) = step.action {
            action.perform(&mut self.driven);
        }

        Ok(self.current)
    }

    fn switch_to(&mut self, target: State, event: Option<Event>) {
        if self.current == target {
            tracing::trace!(state = %target, "already current, skipping switch");
            return;
        }

        let from = self.current;
        from.exit(&mut self.driven);
        self.current = target;
        target.enter(&mut self.driven);

        tracing::debug!(%from, to = %target, event = ?event, "state switched");
        self.history.push(StateTransition {
            from,
            to: target,
            event,
            timestamp: Utc::now(),
        });
    }
}

//! State switch history tracking.
//!
//! Every switch the context performs is recorded with the event that caused
//! it and the time it happened.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state switch.
///
/// # Example
///
/// ```rust
/// use state_pattern::{Event, State, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: State::Null,
///     to: State::Idle,
///     event: Some(Event::Create),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.event.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: State,
    /// The state being entered
    pub to: State,
    /// The dispatched event, or `None` for a direct `set_state` call
    pub event: Option<Event>,
    /// When the switch occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state switches.
///
/// `record` returns a new history with the transition appended and leaves
/// the original untouched. Owners that only ever append use `push`.
///
/// # Example
///
/// ```rust
/// use state_pattern::{Event, State, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: State::Null,
///         to: State::Idle,
///         event: Some(Event::Create),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: State::Idle,
///         to: State::Ready,
///         event: Some(Event::Connect),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![State::Null, State::Idle, State::Ready]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// Drop every recorded transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<State> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Events that drove the recorded switches, skipping direct `set_state` calls.
    pub fn events(&self) -> Vec<Event> {
        self.transitions.iter().filter_map(|t| t.event).collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

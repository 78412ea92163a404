//! State identities of the machine.
//!
//! A state is a plain tag. It carries no data and owns nothing; which events
//! it accepts is decided by the transition table, and its entry/exit hooks
//! are forwarded to the caller's [`Driven`](crate::machine::Driven) sink.

use super::event::Event;
use super::transition::transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current position of the machine.
///
/// # Example
///
/// ```rust
/// use state_pattern::{Event, State};
///
/// assert!(State::Null.accepts(Event::Create));
/// assert!(!State::Null.accepts(Event::Connect));
/// assert_eq!(State::Idle.accepted_events(), vec![Event::Connect, Event::Destroy]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum State {
    /// Nothing has been created yet. This is the initial state.
    #[default]
    Null,
    /// Created but not connected.
    Idle,
    /// Connected and ready for use.
    Ready,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 3] = [State::Null, State::Idle, State::Ready];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Idle => "Idle",
            Self::Ready => "Ready",
        }
    }

    /// Check whether `event` has a row in the transition table for this state.
    pub fn accepts(&self, event: Event) -> bool {
        transition(*self, event).is_ok()
    }

    /// Events this state accepts, in [`Event::ALL`] order.
    pub fn accepted_events(&self) -> Vec<Event> {
        Event::ALL
            .into_iter()
            .filter(|event| self.accepts(*event))
            .collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(State::Null.name(), "Null");
        assert_eq!(State::Idle.name(), "Idle");
        assert_eq!(State::Ready.name(), "Ready");
    }

    #[test]
    fn default_state_is_null() {
        assert_eq!(State::default(), State::Null);
    }

    #[test]
    fn accepted_events_follow_table() {
        assert_eq!(State::Null.accepted_events(), vec![Event::Create]);
        assert_eq!(
            State::Idle.accepted_events(),
            vec![Event::Connect, Event::Destroy]
        );
        assert_eq!(State::Ready.accepted_events(), vec![Event::Disconnect]);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = State::Ready;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(State::Idle, State::Idle);
        assert_ne!(State::Idle, State::Ready);
    }
}

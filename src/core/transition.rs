//! The transition table.
//!
//! [`transition`] is a pure function from `(state, event)` to the resulting
//! [`Transition`]. It performs no side effects; the
//! [`Context`](crate::machine::Context) applies the result.

use super::event::Event;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Output action attached to a transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    ConnectProcess,
    DisconnectProcess,
}

impl Action {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectProcess => "ConnectProcess",
            Self::DisconnectProcess => "DisconnectProcess",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: State,
    /// The event that triggers the transition
    pub event: Event,
    /// The state being transitioned to
    pub to: State,
    /// Output action run after the target state is entered
    pub action: Option<Action>,
}

/// Raised when an event has no row for the current state.
///
/// The machine is left untouched when this is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Event '{event}' was not handled in state '{state}'")]
pub struct UnhandledEvent {
    pub state: State,
    pub event: Event,
}

/// Every valid transition.
pub const TRANSITIONS: [Transition; 4] = [
    Transition {
        from: State::Null,
        event: Event::Create,
        to: State::Idle,
        action: None,
    },
    Transition {
        from: State::Idle,
        event: Event::Connect,
        to: State::Ready,
        action: Some(Action::ConnectProcess),
    },
    Transition {
        from: State::Idle,
        event: Event::Destroy,
        to: State::Null,
        action: None,
    },
    Transition {
        from: State::Ready,
        event: Event::Disconnect,
        to: State::Idle,
        action: Some(Action::DisconnectProcess),
    },
];

/// Look up the transition for `event` in `state`.
///
/// # Example
///
/// ```rust
/// use state_pattern::{transition, Action, Event, State};
///
/// let step = transition(State::Idle, Event::Connect).unwrap();
/// assert_eq!(step.to, State::Ready);
/// assert_eq!(step.action, Some(Action::ConnectProcess));
///
/// let err = transition(State::Null, Event::Connect).unwrap_err();
/// assert_eq!(err.state, State::Null);
/// ```
pub fn transition(state: State, event: Event) -> Result<Transition, UnhandledEvent> {
    let (to, action) = match (state, event) {
        (State::Null, Event::Create) => (State::Idle, None),
        (State::Idle, Event::Connect) => (State::Ready, Some(Action::ConnectProcess)),
        (State::Idle, Event::Destroy) => (State::Null, None),
        (State::Ready, Event::Disconnect) => (State::Idle, Some(Action::DisconnectProcess)),
        (state, event) => return Err(UnhandledEvent { state, event }),
    };

    Ok(Transition {
        from: state,
        event,
        to,
        action,
    })
}

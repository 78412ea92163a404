//! A minimal finite state machine built on the State pattern.
//!
//! An entity moves among three states (`Null`, `Idle`, `Ready`) in response
//! to four events (`Create`, `Connect`, `Disconnect`, `Destroy`). Entering or
//! leaving a state, and some transitions, invoke callbacks on a
//! caller-supplied [`Driven`] sink.
//!
//! # Core Concepts
//!
//! - **State / Event**: plain enums; the table lives in [`transition`]
//! - **Context**: holds the current state and applies transitions
//! - **Driven**: the side-effecting callbacks invoked by the context
//! - **History**: timestamped record of every state switch
//!
//! | From  | Event      | To    | Output action       |
//! |-------|------------|-------|---------------------|
//! | Null  | Create     | Idle  |                     |
//! | Idle  | Connect    | Ready | `ConnectProcess`    |
//! | Idle  | Destroy    | Null  |                     |
//! | Ready | Disconnect | Idle  | `DisconnectProcess` |
//!
//! # Example
//!
//! ```rust
//! use state_pattern::{Context, DrivenCall, Event, RecordingDriven, State};
//!
//! let mut context = Context::new(RecordingDriven::new());
//! for event in [Event::Create, Event::Connect, Event::Disconnect, Event::Destroy] {
//!     context.handle_event(event).unwrap();
//! }
//!
//! assert_eq!(context.current_state(), State::Null);
//! assert_eq!(
//!     context.history().get_path(),
//!     vec![State::Null, State::Idle, State::Ready, State::Idle, State::Null]
//! );
//! assert!(context
//!     .driven()
//!     .calls()
//!     .contains(&DrivenCall::ActionDisconnectProcess));
//! ```

pub mod console;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::console::ConsoleDriven;
pub use crate::core::{
    transition, Action, Event, ParseEventError, State, StateHistory, StateTransition, Transition,
    UnhandledEvent, TRANSITIONS,
};
pub use crate::machine::{Context, Driven, DrivenCall, RecordingDriven};

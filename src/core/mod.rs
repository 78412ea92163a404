//! Pure core of the state machine.
//!
//! - Events and states as plain enums
//! - The transition table as a pure function
//! - Immutable history of state switches
//!
//! Nothing in this module performs side effects; the
//! [`machine`](crate::machine) module applies transitions and invokes hooks.

mod event;
mod history;
mod state;
mod transition;

pub use event::{Event, ParseEventError};
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use transition::{transition, Action, Transition, UnhandledEvent, TRANSITIONS};

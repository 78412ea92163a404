//! The action sink driven by state hooks and transition outputs.

use crate::core::{Action, State};
use serde::{Deserialize, Serialize};

/// Callbacks the machine invokes while switching states.
///
/// Implementations perform the real side effects (logging, I/O, hardware).
/// The machine makes no assumption about what they do beyond that they
/// return. They must not dispatch back into the owning context.
pub trait Driven {
    fn entry_null(&mut self);
    fn entry_idle(&mut self);
    fn entry_ready(&mut self);

    fn exit_null(&mut self);
    fn exit_idle(&mut self);
    fn exit_ready(&mut self);

    fn action_connect_process(&mut self);
    fn action_disconnect_process(&mut self);
}

impl<D: Driven + ?Sized> Driven for &mut D {
    fn entry_null(&mut self) {
        (**self).entry_null()
    }

    fn entry_idle(&mut self) {
        (**self).entry_idle()
    }

    fn entry_ready(&mut self) {
        (**self).entry_ready()
    }

    fn exit_null(&mut self) {
        (**self).exit_null()
    }

    fn exit_idle(&mut self) {
        (**self).exit_idle()
    }

    fn exit_ready(&mut self) {
        (**self).exit_ready()
    }

    fn action_connect_process(&mut self) {
        (**self).action_connect_process()
    }

    fn action_disconnect_process(&mut self) {
        (**self).action_disconnect_process()
    }
}

impl State {
    /// Run this state's entry hook.
    pub fn enter<D: Driven + ?Sized>(self, driven: &mut D) {
        tracing::trace!(state = %self, "entry hook");
        match self {
            Self::Null => driven.entry_null(),
            Self::Idle => driven.entry_idle(),
            Self::Ready => driven.entry_ready(),
        }
    }

    /// Run this state's exit hook.
    pub fn exit<D: Driven + ?Sized>(self, driven: &mut D) {
        tracing::trace!(state = %self, "exit hook");
        match self {
            Self::Null => driven.exit_null(),
            Self::Idle => driven.exit_idle(),
            Self::Ready => driven.exit_ready(),
        }
    }
}

impl Action {
    /// Invoke the matching output callback.
    pub fn perform<D: Driven + ?Sized>(self, driven: &mut D) {
        tracing::trace!(action = %self, "output action");
        match self {
            Self::ConnectProcess => driven.action_connect_process(),
            Self::DisconnectProcess => driven.action_disconnect_process(),
        }
    }
}

/// One invocation of a [`Driven`] callback.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivenCall {
    EntryNull,
    EntryIdle,
    EntryReady,
    ExitNull,
    ExitIdle,
    ExitReady,
    ActionConnectProcess,
    ActionDisconnectProcess,
}

impl DrivenCall {
    /// Callback name as printed by the console sink.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EntryNull => "EntryNull",
            Self::EntryIdle => "EntryIdle",
            Self::EntryReady => "EntryReady",
            Self::ExitNull => "ExitNull",
            Self::ExitIdle => "ExitIdle",
            Self::ExitReady => "ExitReady",
            Self::ActionConnectProcess => "ConnectProcess",
            Self::ActionDisconnectProcess => "DisconnectProcess",
        }
    }
}

/// Sink that remembers every callback in order.
///
/// # Example
///
/// ```rust
/// use state_pattern::{Context, DrivenCall, Event, RecordingDriven};
///
/// let mut recorder = RecordingDriven::new();
/// let mut context = Context::new(&mut recorder);
/// context.handle_event(Event::Create).unwrap();
/// drop(context);
///
/// assert_eq!(
///     recorder.calls(),
///     &[DrivenCall::EntryNull, DrivenCall::ExitNull, DrivenCall::EntryIdle]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingDriven {
    calls: Vec<DrivenCall>,
}

impl RecordingDriven {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[DrivenCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrivenCall> {
        std::mem::take(&mut self.calls)
    }

    fn push(&mut self, call: DrivenCall) {
        self.calls.push(call);
    }
}

impl Driven for RecordingDriven {
    fn entry_null(&mut self) {
        self.push(DrivenCall::EntryNull);
    }

    fn entry_idle(&mut self) {
        self.push(DrivenCall::EntryIdle);
    }

    fn entry_ready(&mut self) {
        self.push(DrivenCall::EntryReady);
    }

    fn exit_null(&mut self) {
        self.push(DrivenCall::ExitNull);
    }

    fn exit_idle(&mut self) {
        self.push(DrivenCall::ExitIdle);
    }

    fn exit_ready(&mut self) {
        self.push(DrivenCall::ExitReady);
    }

    fn action_connect_process(&mut self) {
        self.push(DrivenCall::ActionConnectProcess);
    }

    fn action_disconnect_process(&mut self) {
        self.push(DrivenCall::ActionDisconnectProcess);
    }
}

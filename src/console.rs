//! Console action sink used by the demo binary.

use crate::machine::{Driven, DrivenCall};
use std::io::{self, Write};

/// Prints one line per callback, e.g. `Execute EntryIdle Process...`.
///
/// Callbacks cannot return errors, so the first write failure is kept and
/// later writes are skipped. Check [`ConsoleDriven::take_error`] after
/// dispatching.
pub struct ConsoleDriven<W: Write = io::Stdout> {
    out: W,
    error: Option<io::Error>,
}

impl ConsoleDriven {
    /// Sink printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDriven<W> {
    /// Sink printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Take the first write error, if any occurred.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consume the sink, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, call: DrivenCall) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "Execute {} Process...", call.name()) {
            tracing::warn!(call = call.name(), error = %err, "console write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Driven for ConsoleDriven<W> {
    fn entry_null(&mut self) {
        self.print(DrivenCall::EntryNull);
    }

    fn entry_idle(&mut self) {
        self.print(DrivenCall::EntryIdle);
    }

    fn entry_ready(&mut self) {
        self.print(DrivenCall::EntryReady);
    }

    fn exit_null(&mut self) {
        self.print(DrivenCall::ExitNull);
    }

    fn exit_idle(&mut self) {
        self.print(DrivenCall::ExitIdle);
    }

    fn exit_ready(&mut self) {
        self.print(DrivenCall::ExitReady);
    }

    fn action_connect_process(&mut self) {
        self.print(DrivenCall::ActionConnectProcess);
    }

    fn action_disconnect_process(&mut self) {
        self.print(DrivenCall::ActionDisconnectProcess);
    }
}

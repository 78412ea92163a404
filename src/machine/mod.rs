//! The imperative shell around the pure core.
//!
//! [`Context`] applies transitions from the table and invokes the entry,
//! exit and output callbacks on a caller-supplied [`Driven`] sink.

mod context;
mod driven;

pub use context::Context;
pub use driven::{Driven, DrivenCall, RecordingDriven};

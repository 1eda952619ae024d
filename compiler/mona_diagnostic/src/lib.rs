//! Diagnostic system for the Mona annotation processor.
//!
//! Every analyzer rejection surfaces through this crate:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and help (how to fix)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. Code that skips a candidate because of a shape
//! failure carries the proof, so a rejection can never be silent by
//! accident.
//!
//! ```text
//! // Can only get ErrorGuaranteed by emitting an error
//! let guarantee = queue.emit_error(diagnostic);
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
mod queue;

pub use diagnostic::{
    argument_not_monadic, cannot_apply_to_interface, wrapper_needs_class_argument, Diagnostic,
    Label, Severity,
};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};

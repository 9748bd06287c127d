//! Failure types for precond.
//!
//! This crate contains the violation taxonomy shared by every check: a failure is
//! either an *argument* violation (the caller passed a bad value) or a *state*
//! violation (the receiver is not in the state the call requires). The kind is
//! derived from the cause, so the two can never be conflated.
//!
//! Nothing here performs IO or logging.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod cause;
mod kind;
pub mod settings;
mod violation;

pub use cause::{ArgumentCause, Cause, StateCause};
pub use kind::ViolationKind;
pub use settings::{MessageStyle, MessageStyleError, RenderSettings};
pub use violation::Violation;

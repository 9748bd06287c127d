//! Checks on the receiver's own state.
//!
//! Use these to guard a query or command that only makes sense after some
//! protocol step, e.g. reading a result before the action producing it ran.
//! Failures are state violations regardless of the call's arguments.

use precond_types::{StateCause, Violation};

use crate::nullable::Nullable;

fn check(holds: bool, cause: StateCause, message: Option<&str>) -> Result<(), Violation> {
    if holds {
        return Ok(());
    }
    let violation = Violation::state(cause);
    Err(match message {
        Some(message) => violation.with_message(message),
        None => violation,
    })
}

/// Require that a predicate on object state holds.
pub fn require_state(predicate: bool) -> Result<(), Violation> {
    check(predicate, StateCause::PredicateFalse, None)
}

/// Require that a predicate on object state holds. On failure the description
/// contains `message`.
pub fn require_state_with(predicate: bool, message: &str) -> Result<(), Violation> {
    check(predicate, StateCause::PredicateFalse, Some(message))
}

/// Require that a reference held by the object (usually a field) is non-null.
pub fn require_state_non_null<T: Nullable>(reference: T) -> Result<(), Violation> {
    check(!reference.is_null(), StateCause::NullReference, None)
}

pub fn require_state_non_null_with<T: Nullable>(
    reference: T,
    message: &str,
) -> Result<(), Violation> {
    check(!reference.is_null(), StateCause::NullReference, Some(message))
}

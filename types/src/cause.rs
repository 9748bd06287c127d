//! Why a check failed.
//!
//! Each cause carries its own default description. The descriptions are stable:
//! callers and tests may match on them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::ViolationKind;

/// A caller supplied an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentCause {
    #[error("Precondition violation: Null reference not allowed.")]
    NullReference,
    #[error("Precondition violation: Predicate evaluated to false.")]
    PredicateFalse,
    #[error("Precondition violation: String must not be empty.")]
    EmptyString,
    /// First null element found while traversing a collection.
    #[error("Precondition violation: Null element not allowed at index {index}.")]
    NullElement { index: usize },
    #[error("Precondition violation: Null key not allowed.")]
    NullKey,
    #[error("Precondition violation: Null value not allowed.")]
    NullValue,
}

/// The receiving object is not in the state a call requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateCause {
    #[error("State precondition violation: Reference must not be null.")]
    NullReference,
    #[error("State precondition violation: Predicate evaluated to false.")]
    PredicateFalse,
}

/// A cause tagged with its kind.
///
/// Argument causes and state causes live in separate enums, so a cause can only
/// ever be reported under the kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cause", rename_all = "snake_case")]
pub enum Cause {
    #[error("{0}")]
    Argument(ArgumentCause),
    #[error("{0}")]
    State(StateCause),
}

impl Cause {
    #[must_use]
    pub const fn kind(self) -> ViolationKind {
        match self {
            Cause::Argument(_) => ViolationKind::Argument,
            Cause::State(_) => ViolationKind::State,
        }
    }
}

impl From<ArgumentCause> for Cause {
    fn from(cause: ArgumentCause) -> Self {
        Cause::Argument(cause)
    }
}

impl From<StateCause> for Cause {
    fn from(cause: StateCause) -> Self {
        Cause::State(cause)
    }
}

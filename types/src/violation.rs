//! The failure value returned by every precondition check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cause::{ArgumentCause, Cause, StateCause};
use crate::kind::ViolationKind;
use crate::settings::MessageStyle;

/// A broken precondition.
///
/// `Display` renders the cause's default description, followed by the caller's
/// message in parentheses when one was supplied:
///
/// ```text
/// Precondition violation: Predicate evaluated to false. (index out of range)
/// ```
///
/// The message always appears verbatim, so callers can assert containment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{cause}{}", annotation(.message))]
pub struct Violation {
    #[serde(flatten)]
    cause: Cause,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[allow(clippy::ref_option)]
fn annotation(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" ({message})"),
        None => String::new(),
    }
}

impl Violation {
    #[must_use]
    pub fn new(cause: impl Into<Cause>) -> Self {
        Self {
            cause: cause.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn argument(cause: ArgumentCause) -> Self {
        Self::new(cause)
    }

    #[must_use]
    pub fn state(cause: StateCause) -> Self {
        Self::new(cause)
    }

    /// Attach a caller-supplied diagnostic message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.cause.kind()
    }

    #[must_use]
    pub const fn cause(&self) -> Cause {
        self.cause
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn is_argument(&self) -> bool {
        matches!(self.cause, Cause::Argument(_))
    }

    #[must_use]
    pub const fn is_state(&self) -> bool {
        matches!(self.cause, Cause::State(_))
    }

    /// Render the description with an explicit message style.
    ///
    /// `MessageStyle::Parenthesized` is identical to `Display`.
    /// `MessageStyle::Replace` yields the caller's message alone, falling back to
    /// the default description when there is none.
    #[must_use]
    pub fn render(&self, style: MessageStyle) -> String {
        match (style, self.message.as_deref()) {
            (MessageStyle::Replace, Some(message)) => message.to_owned(),
            _ => self.to_string(),
        }
    }
}

impl From<ArgumentCause> for Violation {
    fn from(cause: ArgumentCause) -> Self {
        Self::argument(cause)
    }
}

impl From<StateCause> for Violation {
    fn from(cause: StateCause) -> Self {
        Self::state(cause)
    }
}

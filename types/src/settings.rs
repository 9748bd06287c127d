//! Rendering configuration hosts can embed in their own config files.
//!
//! The library reads no files. Applications deserialize `RenderSettings` from
//! whatever table they keep (TOML, JSON) and pass the resolved style to
//! [`Violation::render`](crate::Violation::render).

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::violation::Violation;

/// How a caller-supplied message is combined with the default description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    /// `"{default} ({message})"`.
    #[default]
    #[serde(alias = "append")]
    Parenthesized,
    /// The message alone.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message style: {0:?} (expected \"parenthesized\" or \"replace\")")]
pub struct MessageStyleError(String);

impl MessageStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageStyle::Parenthesized => "parenthesized",
            MessageStyle::Replace => "replace",
        }
    }

    /// Parse a style name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for MessageStyle {
    type Err = MessageStyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "parenthesized" | "append" => Ok(MessageStyle::Parenthesized),
            "replace" => Ok(MessageStyle::Replace),
            _ => Err(MessageStyleError(value.to_string())),
        }
    }
}

/// Resolved rendering settings.
///
/// A missing `message_style` key resolves to [`MessageStyle::Parenthesized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    message_style: MessageStyle,
}

impl RenderSettings {
    #[must_use]
    pub const fn new(message_style: MessageStyle) -> Self {
        Self { message_style }
    }

    #[must_use]
    pub const fn message_style(self) -> MessageStyle {
        self.message_style
    }

    #[must_use]
    pub fn render(self, violation: &Violation) -> String {
        violation.render(self.message_style)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a call boundary broke the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The immediate caller supplied an invalid value.
    Argument,
    /// The receiving object is not in the state the call expects.
    State,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Argument => "argument",
            ViolationKind::State => "state",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Precondition checks in the spirit of Design by Contract.
//!
//! Call a check at the top of a routine (or before answering a query) and
//! propagate its [`Violation`] with `?`:
//!
//! ```
//! use precond_core::{require_non_empty_string, require_state_non_null, Violation};
//!
//! struct Lookup {
//!     result: Option<String>,
//! }
//!
//! impl Lookup {
//!     fn execute(&mut self, key: Option<&str>) -> Result<(), Violation> {
//!         require_non_empty_string(key)?;
//!         self.result = key.map(str::to_uppercase);
//!         Ok(())
//!     }
//!
//!     fn result(&self) -> Result<&str, Violation> {
//!         require_state_non_null(&self.result)?;
//!         Ok(self.result.as_deref().unwrap_or_default())
//!     }
//! }
//!
//! let mut lookup = Lookup { result: None };
//! assert!(lookup.result().unwrap_err().is_state());
//! assert!(lookup.execute(Some("")).unwrap_err().is_argument());
//! lookup.execute(Some("abc")).unwrap();
//! assert_eq!(lookup.result().unwrap(), "ABC");
//! ```
//!
//! Argument checks (`require*`, `require_non_null*`, `require_non_empty_string*`,
//! `require_no_null_elements`, `require_no_null_entries`) fail with
//! [`ViolationKind::Argument`]. State checks (`require_state*`,
//! `require_state_non_null*`) fail with [`ViolationKind::State`].
//!
//! The checks are pure: no logging, no shared state. [`TraceViolation`] is an
//! opt-in adapter for callers that want violations in their traces.

mod argument;
mod nullable;
mod state;
mod trace;

pub use argument::{
    require, require_no_null_elements, require_no_null_entries, require_non_empty_string,
    require_non_empty_string_with, require_non_null, require_non_null_with, require_with,
};
pub use nullable::Nullable;
pub use state::{
    require_state, require_state_non_null, require_state_non_null_with, require_state_with,
};
pub use trace::TraceViolation;

pub use precond_types::{
    ArgumentCause, Cause, MessageStyle, RenderSettings, StateCause, Violation, ViolationKind,
};

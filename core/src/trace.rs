//! Opt-in tracing for check results.

use precond_types::Violation;

/// Record violations as `tracing` events.
///
/// The checks themselves never log. Callers that want a record of a violation
/// (at a service boundary, say) chain `.traced("component")` before `?`.
pub trait TraceViolation: Sized {
    /// Emit a `debug` event if `self` is a violation, then return `self` unchanged.
    #[must_use]
    fn traced(self, scope: &str) -> Self;
}

impl<T> TraceViolation for Result<T, Violation> {
    fn traced(self, scope: &str) -> Self {
        if let Err(violation) = &self {
            tracing::debug!(
                kind = violation.kind().as_str(),
                scope,
                "{violation}"
            );
        }
        self
    }
}

//! Checks on values supplied by the immediate caller.
//!
//! Every failure here is an argument violation.

use precond_types::{ArgumentCause, Violation};

use crate::nullable::Nullable;

fn violation(cause: ArgumentCause, message: Option<&str>) -> Violation {
    let violation = Violation::argument(cause);
    match message {
        Some(message) => violation.with_message(message),
        None => violation,
    }
}

fn check_predicate(predicate: bool, message: Option<&str>) -> Result<(), Violation> {
    if predicate {
        Ok(())
    } else {
        Err(violation(ArgumentCause::PredicateFalse, message))
    }
}

fn check_non_null<T: Nullable>(reference: &T, message: Option<&str>) -> Result<(), Violation> {
    if reference.is_null() {
        Err(violation(ArgumentCause::NullReference, message))
    } else {
        Ok(())
    }
}

fn check_non_empty_string<S: AsRef<str>>(
    string: Option<S>,
    message: Option<&str>,
) -> Result<(), Violation> {
    check_non_null(&string, message)?;
    match string {
        Some(string) if string.as_ref().is_empty() => {
            Err(violation(ArgumentCause::EmptyString, message))
        }
        _ => Ok(()),
    }
}

/// Require that `predicate` holds.
pub fn require(predicate: bool) -> Result<(), Violation> {
    check_predicate(predicate, None)
}

/// Require that `predicate` holds. On failure the description contains `message`.
pub fn require_with(predicate: bool, message: &str) -> Result<(), Violation> {
    check_predicate(predicate, Some(message))
}

/// Require a non-null reference.
///
/// Fails with an argument violation, not a state violation: a null handed in by
/// the caller is a caller bug.
pub fn require_non_null<T: Nullable>(reference: T) -> Result<(), Violation> {
    check_non_null(&reference, None)
}

/// Require a non-null reference. On failure the description contains `message`.
pub fn require_non_null_with<T: Nullable>(reference: T, message: &str) -> Result<(), Violation> {
    check_non_null(&reference, Some(message))
}

/// Require a present, non-empty string (implies [`require_non_null`]).
///
/// Absent and empty strings are both argument violations. They differ only in
/// cause: `NullReference` versus `EmptyString`.
pub fn require_non_empty_string<S: AsRef<str>>(string: Option<S>) -> Result<(), Violation> {
    check_non_empty_string(string, None)
}

/// Like [`require_non_empty_string`], with `message` in the failure description.
pub fn require_non_empty_string_with<S: AsRef<str>>(
    string: Option<S>,
    message: &str,
) -> Result<(), Violation> {
    check_non_empty_string(string, Some(message))
}

/// Require a present collection with no null elements.
///
/// The collection itself is checked first. Elements are visited in iteration
/// order and the first null one ends the check with
/// [`ArgumentCause::NullElement`] carrying its position. An empty collection
/// passes.
pub fn require_no_null_elements<C>(collection: Option<C>) -> Result<(), Violation>
where
    C: IntoIterator,
    C::Item: Nullable,
{
    let Some(collection) = collection else {
        return Err(violation(ArgumentCause::NullReference, None));
    };

    match collection.into_iter().position(|element| element.is_null()) {
        Some(index) => Err(violation(ArgumentCause::NullElement { index }, None)),
        None => Ok(()),
    }
}

/// Require a present map with no null keys and no null values.
///
/// Takes anything that iterates `(key, value)` pairs, so `Some(&map)` works for
/// `HashMap` and `BTreeMap`. A map that admits a null key
/// (`HashMap<Option<K>, V>`) is still rejected when it holds one. For each entry
/// the key is checked before its value; the first failure ends the check.
pub fn require_no_null_entries<M, K, V>(map: Option<M>) -> Result<(), Violation>
where
    M: IntoIterator<Item = (K, V)>,
    K: Nullable,
    V: Nullable,
{
    let Some(map) = map else {
        return Err(violation(ArgumentCause::NullReference, None));
    };

    for (key, value) in map {
        if key.is_null() {
            return Err(violation(ArgumentCause::NullKey, None));
        }
        if value.is_null() {
            return Err(violation(ArgumentCause::NullValue, None));
        }
    }
    Ok(())
}

//! Boundary predicates for untyped input.
//!
//! These are plain boolean checks for values that arrive untyped. Typed code
//! inside the core uses `Option` instead. The narrowing forms
//! ([`defined`], [`non_empty_str`]) return the checked view so callers do not
//! have to match twice.

use crate::value::Value;

/// Returns true unless the value is null.
#[must_use]
pub const fn is_not_null(value: &Value) -> bool {
    !value.is_null()
}

/// Returns true unless the value is undefined.
#[must_use]
pub const fn is_not_undefined(value: &Value) -> bool {
    !value.is_undefined()
}

/// Returns true if the value is neither null nor undefined.
#[must_use]
pub const fn is_defined(value: &Value) -> bool {
    !value.value_type().is_absent()
}

/// Returns true if the value is the empty string.
#[must_use]
pub fn is_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

/// Returns true if the value is a string with at least one character.
#[must_use]
pub fn is_not_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// Narrows to the value itself when it is neither null nor undefined.
#[must_use]
pub const fn defined(value: &Value) -> Option<&Value> {
    if is_defined(value) { Some(value) } else { None }
}

/// Narrows to the string contents when the value is a non-empty string.
#[must_use]
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

//! The success/failure union and its combinator algebra.
//!
//! Every recoverable failure in Keystone travels as an [`Outcome`]; nothing in
//! the core panics or returns a different error channel. Failures carry a
//! rendered, human-readable message rather than a typed error so that callers
//! can forward, prefix, and display them uniformly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// Message used when a success arrives without its payload.
pub const DATA_UNDEFINED: &str = "Data is undefined";

/// Message used when a failure arrives without its message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Either a successful value or a failure message.
///
/// Exactly one arm is ever populated. Outcomes are immutable once built and
/// are consumed by pattern matching or by the combinators below.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "OutcomeParts<T>", bound(deserialize = "T: Deserialize<'de>"))
)]
#[must_use]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with the given message.
    Failure(String),
}

/// Wraps a value as a successful outcome.
pub fn ok<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Wraps a message as a failed outcome.
pub fn err<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::Failure(message.into())
}

impl<T> Outcome<T> {
    /// Wraps a value as a successful outcome.
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a message as a failed outcome.
    pub fn err(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Normalizes an untyped boundary shape.
    ///
    /// A success without data becomes a [`DATA_UNDEFINED`] failure, and a
    /// failure without a message becomes an [`UNKNOWN_ERROR`] failure.
    pub fn from_parts(parts: OutcomeParts<T>) -> Self {
        match (parts.success, parts.data) {
            (true, Some(data)) => Self::Success(data),
            (true, None) => Self::Failure(DATA_UNDEFINED.to_string()),
            (false, _) => Self::Failure(parts.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
        }
    }

    /// Returns true if this outcome carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this outcome carries a failure message.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the value, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Converts into the value, discarding any failure message.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Applies `f` to the value, propagating a failure unchanged.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chains an outcome-producing step, propagating a failure unchanged.
    ///
    /// The outcome returned by `f` is passed through without re-wrapping.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Rewrites the failure message, leaving a success untouched.
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(message) => Self::Failure(f(message)),
        }
    }

    /// Prefixes a failure message with `context`, as in `"{context}: {message}"`.
    pub fn with_context(self, context: &str) -> Self {
        self.map_err(|message| format!("{context}: {message}"))
    }

    /// Returns the value, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or `T::default()` on failure.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the value, or computes one from the failure message.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(&str) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(message) => f(&message),
        }
    }

    /// Converts into a standard [`Result`] so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure message if this outcome is a failure.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{value}"),
            Self::Failure(message) => write!(f, "error: {message}"),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<OutcomeParts<T>> for Outcome<T> {
    fn from(parts: OutcomeParts<T>) -> Self {
        Self::from_parts(parts)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(value) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", value)?;
            }
            Self::Failure(message) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

/// The untyped `{ success, data, error }` shape an outcome crosses a boundary in.
///
/// Unlike [`Outcome`], nothing stops this shape from claiming success without
/// data, or failure without a message. Its predicates and combinators keep the
/// lenient semantics callers of the wire format rely on:
///
/// - [`is_success`](Self::is_success) requires both the flag and the data.
/// - [`is_error`](Self::is_error) inspects the flag only.
///
/// So a flagged success with no data is reported as neither.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(deserialize = "T: Deserialize<'de>")))]
pub struct OutcomeParts<T> {
    /// Whether the producer reported success.
    pub success: bool,
    /// The payload, when present.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
    /// The failure message, when present.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl<T> OutcomeParts<T> {
    /// A flagged success carrying `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A flagged failure carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Returns true only if the success flag is set and data is present.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success && self.data.is_some()
    }

    /// Returns true if the success flag is clear.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.success
    }

    /// Normalizes, then maps the value.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::from_parts(self).map(f)
    }

    /// Normalizes, then chains an outcome-producing step.
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        Outcome::from_parts(self).flat_map(f)
    }

    /// Returns the data if flagged successful and present, otherwise `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match (self.success, self.data) {
            (true, Some(data)) => data,
            _ => default,
        }
    }
}

impl<T> From<Outcome<T>> for OutcomeParts<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::success(value),
            Outcome::Failure(message) => Self::failure(message),
        }
    }
}

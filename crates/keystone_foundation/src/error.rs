//! Conversion failures.
//!
//! Uses `thiserror` to define the message text once; conversions render the
//! error into the failure arm of an [`Outcome`](crate::Outcome).

use thiserror::Error;

use crate::types::Type;

/// Why an untyped value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A string did not parse as a finite number.
    #[error("cannot convert \"{text}\" to number")]
    NotNumeric {
        /// The rejected text.
        text: String,
    },

    /// A string was neither `"true"` nor `"false"`.
    #[error("cannot convert \"{text}\" to boolean")]
    NotBooleanText {
        /// The rejected text.
        text: String,
    },

    /// A number other than 0 or 1 was offered as a boolean.
    #[error("cannot convert number {number} to boolean")]
    NotBooleanNumber {
        /// The rejected number, as rendered.
        number: String,
    },

    /// The value's type has no conversion to the target.
    #[error("cannot convert value of type {actual} to {target}")]
    Unsupported {
        /// The type of the offending value.
        actual: Type,
        /// The requested target, e.g. `"number"`.
        target: &'static str,
    },
}

impl ConversionError {
    /// Creates an unparseable-number error.
    #[must_use]
    pub fn not_numeric(text: impl Into<String>) -> Self {
        Self::NotNumeric { text: text.into() }
    }

    /// Creates an unsupported-type error.
    #[must_use]
    pub const fn unsupported(actual: Type, target: &'static str) -> Self {
        Self::Unsupported { actual, target }
    }
}

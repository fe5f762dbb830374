//! Type descriptors for untyped values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The runtime type of a [`Value`](crate::Value).
///
/// Used to name the offending input when a conversion is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// An explicit null.
    Null,
    /// A missing value.
    Undefined,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Ordered list of values.
    List,
    /// String-keyed map of values.
    Map,
}

impl Type {
    /// Returns true for null and undefined.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

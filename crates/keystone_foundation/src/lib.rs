//! Core types, combinators, and untyped-value conversions for Keystone.
//!
//! This crate provides:
//! - [`Outcome`] - The success/failure union used for every recoverable failure
//! - [`OutcomeParts`] - The untyped wire shape an [`Outcome`] is normalized from
//! - [`Value`] - Untyped input values crossing the system boundary
//! - [`Type`] - Type descriptors used in conversion diagnostics
//! - Conversions ([`to_number`], [`to_string`], [`to_boolean`])
//! - Boundary predicates in [`validate`]
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod convert;
pub mod error;
pub mod outcome;
pub mod types;
pub mod validate;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use convert::{format_number, to_boolean, to_number, to_string};
pub use error::ConversionError;
pub use outcome::{DATA_UNDEFINED, Outcome, OutcomeParts, UNKNOWN_ERROR, err, ok};
pub use types::Type;
pub use value::Value;

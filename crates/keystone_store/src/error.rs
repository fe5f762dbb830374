//! Failures reported by the user store.
//!
//! The rendered messages are part of the store's observable contract; callers
//! match on them, so the wording here must stay stable.

use keystone_foundation::Outcome;
use thiserror::Error;

/// Why a store operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The name was empty or whitespace only.
    #[error("Name cannot be empty")]
    NameEmpty,

    /// The name was longer than the configured limit.
    #[error("Name cannot exceed {max} characters")]
    NameTooLong {
        /// The configured maximum, in characters.
        max: usize,
    },

    /// The email was empty or whitespace only.
    #[error("Email cannot be empty")]
    EmailEmpty,

    /// The email did not look like `local@domain.tld`.
    #[error("Invalid email format")]
    EmailInvalid,

    /// The email pattern itself failed to compile.
    #[error("Email pattern is unavailable: {0}")]
    EmailPattern(String),

    /// Another user already holds the email being created.
    #[error("User with this email already exists")]
    EmailExists,

    /// Another user already holds the email being updated to.
    #[error("Email is already in use by another user")]
    EmailInUse,

    /// The id text did not convert to a number.
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// No user is stored under the id.
    #[error("User not found with ID: {id}")]
    NotFound {
        /// The id as rendered from the request.
        id: String,
    },
}

impl<T> From<StoreError> for Outcome<T> {
    fn from(error: StoreError) -> Self {
        Self::Failure(error.to_string())
    }
}

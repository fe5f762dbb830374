//! User records and the requests that create or change them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stored user.
///
/// ## Invariants
/// - `id` is positive and never reused by the store that issued it.
/// - `name` is non-empty and within the store's length limit.
/// - `email` is non-empty and shaped like `local@domain.tld`.
///
/// Records are immutable. Updates produce a new record with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct User {
    id: u64,
    name: String,
    email: String,
}

impl User {
    pub(crate) const fn new(id: u64, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// The numeric identity of this user.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.name, self.email)
    }
}

/// Request to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct CreateUser {
    /// Requested display name.
    pub name: String,
    /// Requested email address.
    pub email: String,
}

impl CreateUser {
    /// Creates a request from a name and an email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update of a user.
///
/// `None` leaves a field unchanged. `Some` is validated like a new value,
/// so `Some("")` is rejected rather than ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct UserUpdate {
    /// Replacement display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Replacement email address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
}

impl UserUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to replace the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns true if no field is given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

//! Field validation for user requests.

use std::sync::LazyLock;

use keystone_foundation::{Outcome, ok};
use regex::Regex;

use crate::error::StoreError;

/// Shape an email must match: no whitespace or extra `@`, and a dotted domain.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Checks that a name is non-blank and at most `max_length` characters.
pub fn validate_name(name: &str, max_length: usize) -> Outcome<()> {
    if name.trim().is_empty() {
        return StoreError::NameEmpty.into();
    }
    if name.chars().count() > max_length {
        return StoreError::NameTooLong { max: max_length }.into();
    }
    ok(())
}

/// Checks that an email is non-blank and matches [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> Outcome<()> {
    if email.trim().is_empty() {
        return StoreError::EmailEmpty.into();
    }
    match EMAIL_RE.as_ref() {
        Ok(re) if re.is_match(email) => ok(()),
        Ok(_) => StoreError::EmailInvalid.into(),
        Err(error) => StoreError::EmailPattern(error.to_string()).into(),
    }
}

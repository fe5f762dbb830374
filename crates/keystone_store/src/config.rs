//! Configuration for the user store.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default upper bound on name length, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 50;

/// Validation limits applied by a [`UserStore`](crate::UserStore).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoreConfig {
    /// Longest accepted name, counted in characters rather than bytes.
    pub max_name_length: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the maximum name length.
    #[must_use]
    pub fn with_max_name_length(mut self, max: usize) -> Self {
        self.max_name_length = max;
        self
    }
}

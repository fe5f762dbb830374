//! The in-memory user store.
//!
//! Every operation validates before it mutates, so a rejected request leaves
//! the store exactly as it was. Mutations take `&mut self`, which makes each
//! check-then-write sequence exclusive without any locking. Hosts that share
//! a store across threads must guard the whole store with one mutex.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

use keystone_foundation::{LtMap, Outcome, Value, format_number, ok, to_number};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::user::{CreateUser, User, UserUpdate};
use crate::validation::{validate_email, validate_name};

/// Keyed collection of users plus the counter that issues their ids.
///
/// Ids start at 1 and only ever increase; deleting a user never frees its id.
/// Because ids are issued in creation order, the id-ordered map also
/// enumerates users in insertion order.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: LtMap<u64, User>,
    next_id: u64,
    config: StoreConfig,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            users: LtMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the id the next created user will receive.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns true if a user is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.users.contains_key(&id)
    }

    /// Looks up a user by typed id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Validates and stores a new user.
    ///
    /// Checks run in order and the first failure wins: name, email shape,
    /// then email uniqueness against every stored user.
    pub fn create(&mut self, request: CreateUser) -> Outcome<User> {
        self.check_create(&request)
            .map(|()| self.insert(request))
            .map_err(rejected("create"))
    }

    /// Looks up a user by textual id.
    ///
    /// The text must convert to a number (`"Invalid ID format: ..."`
    /// otherwise) and name a stored user (`"User not found with ID: ..."`).
    pub fn get_by_id(&self, id_text: &str) -> Outcome<User> {
        self.locate(id_text).map(User::clone)
    }

    /// Returns every stored user in insertion order.
    pub fn list(&self) -> Outcome<Vec<User>> {
        ok(self.users.values().cloned().collect())
    }

    /// Applies a partial update to the user named by `id_text`.
    ///
    /// Lookup failures are forwarded verbatim. A given name or email is
    /// validated like a new value, and a given email must not belong to any
    /// other user. The stored record is replaced; its id never changes.
    pub fn update(&mut self, id_text: &str, changes: UserUpdate) -> Outcome<User> {
        self.locate(id_text)
            .flat_map(|current| self.apply(current, changes))
            .map(|updated| self.replace(updated))
            .map_err(rejected("update"))
    }

    /// Removes the user named by `id_text`.
    pub fn delete(&mut self, id_text: &str) -> Outcome<bool> {
        self.locate(id_text)
            .map(User::id)
            .map(|id| {
                self.users = self.users.remove(&id);
                info!(id, remaining = self.users.len(), "user deleted");
                true
            })
            .map_err(rejected("delete"))
    }

    fn check_create(&self, request: &CreateUser) -> Outcome<()> {
        validate_name(&request.name, self.config.max_name_length)
            .flat_map(|()| validate_email(&request.email))
            .flat_map(|()| self.ensure_email_free(&request.email, None, StoreError::EmailExists))
    }

    fn insert(&mut self, request: CreateUser) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User::new(id, request.name, request.email);
        self.users = self.users.insert(id, user.clone());
        info!(id, email = user.email(), "user created");
        user
    }

    fn locate(&self, id_text: &str) -> Outcome<&User> {
        to_number(&Value::from(id_text))
            .map_err(|cause| StoreError::InvalidId(cause).to_string())
            .flat_map(|number| self.find(number))
    }

    fn find(&self, number: f64) -> Outcome<&User> {
        match storage_key(number).and_then(|id| self.users.get(&id)) {
            Some(user) => ok(user),
            None => StoreError::NotFound {
                id: format_number(number),
            }
            .into(),
        }
    }

    fn apply(&self, current: &User, changes: UserUpdate) -> Outcome<User> {
        let name_check = match &changes.name {
            Some(name) => validate_name(name, self.config.max_name_length),
            None => ok(()),
        };

        name_check
            .flat_map(|()| match &changes.email {
                Some(email) => validate_email(email).flat_map(|()| {
                    self.ensure_email_free(email, Some(current.id()), StoreError::EmailInUse)
                }),
                None => ok(()),
            })
            .map(|()| {
                User::new(
                    current.id(),
                    changes.name.unwrap_or_else(|| current.name().to_string()),
                    changes.email.unwrap_or_else(|| current.email().to_string()),
                )
            })
    }

    fn replace(&mut self, user: User) -> User {
        self.users = self.users.insert(user.id(), user.clone());
        info!(id = user.id(), "user updated");
        user
    }

    /// Fails with `conflict` if any user other than `except` holds `email`.
    fn ensure_email_free(
        &self,
        email: &str,
        except: Option<u64>,
        conflict: StoreError,
    ) -> Outcome<()> {
        let taken = self
            .users
            .values()
            .any(|user| user.email() == email && Some(user.id()) != except);
        if taken { conflict.into() } else { ok(()) }
    }
}

/// Maps a numeric id onto a storage key, if it could ever have been issued.
fn storage_key(number: f64) -> Option<u64> {
    let issuable = number.fract() == 0.0 && number >= 1.0 && number < u64::MAX as f64;
    issuable.then_some(number as u64)
}

fn rejected(operation: &'static str) -> impl FnOnce(String) -> String {
    move |reason| {
        debug!(operation, %reason, "request rejected");
        reason
    }
}

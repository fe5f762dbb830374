//! User records, field validation, and the in-memory CRUD store for Keystone.
//!
//! This crate provides:
//! - [`User`] - Immutable user records keyed by numeric id
//! - [`CreateUser`] / [`UserUpdate`] - Requests accepted by the store
//! - [`UserStore`] - The keyed collection and its id counter
//! - [`StoreConfig`] - Tunable validation limits
//! - [`StoreError`] - The failure messages the store reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod store;
pub mod user;
pub mod validation;

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::UserStore;
pub use user::{CreateUser, User, UserUpdate};

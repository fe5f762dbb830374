//! Keystone - Outcome values, combinators, and a validating user store
//!
//! This crate re-exports all layers of the Keystone workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: keystone_runtime    - Command shell, output formatting, CLI
//! Layer 1: keystone_store      - Validating in-memory user store
//! Layer 0: keystone_foundation - Outcome, Value, conversions, validators
//! ```

pub use keystone_foundation as foundation;
pub use keystone_runtime as runtime;
pub use keystone_store as store;

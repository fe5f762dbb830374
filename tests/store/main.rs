//! Integration tests for Layer 1: Store
//!
//! Tests for user creation, lookup, update, and deletion through the public
//! store API, including every contract error message.

mod invariants;
mod scenarios;

//! Integration tests for Layer 2: Runtime
//!
//! Tests for the command shell: sessions, rendering, and the batch and
//! interactive loops.

mod repl;
mod session;

//! Command shell, output formatting, and CLI for Keystone.
//!
//! This crate provides:
//! - [`Repl`] - Interactive and batch command loop over a [`Session`]
//! - [`Session`] - A user store plus output preferences
//! - [`Command`] parsing from shell lines
//! - Text and JSON rendering of outcomes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod repl;
pub mod session;

pub use command::{Command, parse_command};
pub use config::ShellConfig;
pub use editor::{LineEditor, NullEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use format::OutputFormat;
pub use repl::Repl;
pub use session::{Evaluation, Session};

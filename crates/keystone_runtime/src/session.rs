//! Session state for the shell.
//!
//! The session owns the user store and the current output format, and turns
//! each parsed command into rendered output.

use keystone_foundation::{Outcome, ok};
use keystone_store::UserStore;
use tracing::debug;

use crate::command::{Command, parse_command};
use crate::config::ShellConfig;
use crate::format::{OutputFormat, Render, render, render_failure};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
create <name> <email>                      Create a user
get <id>                                   Show one user
list                                       Show all users
update <id> [name=<name>] [email=<email>]  Change a user's fields
delete <id>                                Remove a user
count                                      Number of stored users
format text|json                           Switch output format
help                                       Show this help
quit | exit                                Leave the shell

Quote arguments containing spaces: create \"Ada Lovelace\" ada@example.com";

/// What evaluating one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The line was blank or a comment.
    Nothing,
    /// The command succeeded; print this.
    Output(String),
    /// The command was rejected; print this.
    Failure(String),
    /// The user asked to leave.
    Quit,
}

/// An interactive session over one store.
#[derive(Debug, Default)]
pub struct Session {
    store: UserStore,
    format: OutputFormat,
    parse_failures: usize,
}

impl Session {
    /// Creates a session with an empty default store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from shell settings.
    #[must_use]
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            store: UserStore::with_config(config.store.clone()),
            format: config.output,
            parse_failures: 0,
        }
    }

    /// Returns the session's store.
    #[must_use]
    pub const fn store(&self) -> &UserStore {
        &self.store
    }

    /// Returns the current output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Number of lines that failed to parse so far.
    #[must_use]
    pub const fn parse_failures(&self) -> usize {
        self.parse_failures
    }

    /// Parses and executes one line.
    pub fn eval(&mut self, line: &str) -> Evaluation {
        match parse_command(line) {
            Outcome::Success(None) => Evaluation::Nothing,
            Outcome::Success(Some(command)) => self.execute(command),
            Outcome::Failure(message) => {
                self.parse_failures += 1;
                debug!(%message, "unparseable command");
                Evaluation::Failure(render_failure(&message, self.format))
            }
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Evaluation {
        debug!(?command, "executing");
        match command {
            Command::Create(request) => {
                let outcome = self.store.create(request);
                self.report(&outcome)
            }
            Command::Get(id) => self.report(&self.store.get_by_id(&id)),
            Command::List => self.report(&self.store.list()),
            Command::Update(id, changes) => {
                let outcome = self.store.update(&id, changes);
                self.report(&outcome)
            }
            Command::Delete(id) => {
                let outcome = self.store.delete(&id);
                self.report(&outcome)
            }
            Command::Count => self.report(&ok(self.store.len())),
            Command::Format(format) => {
                self.format = format;
                Evaluation::Output(format!("output format: {format}"))
            }
            Command::Help => Evaluation::Output(HELP.to_string()),
            Command::Quit => Evaluation::Quit,
        }
    }

    fn report<T: Render>(&self, outcome: &Outcome<T>) -> Evaluation {
        let text = render(outcome, self.format);
        if outcome.is_error() {
            Evaluation::Failure(text)
        } else {
            Evaluation::Output(text)
        }
    }
}

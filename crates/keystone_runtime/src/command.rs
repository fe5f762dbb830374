//! Shell command parsing.
//!
//! One command per line. Words are separated by whitespace; double quotes
//! group words and may appear mid-word (`name="Ada L"`), and a backslash
//! escapes the next character inside quotes. A `#` starting a line makes it
//! a comment.

use keystone_foundation::{Outcome, err, ok};
use keystone_store::{CreateUser, UserUpdate};

use crate::format::OutputFormat;

/// Command words offered for completion.
pub const COMMAND_WORDS: [&str; 10] = [
    "create", "get", "list", "update", "delete", "count", "format", "help", "quit", "exit",
];

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <name> <email>`
    Create(CreateUser),
    /// `get <id>`
    Get(String),
    /// `list`
    List,
    /// `update <id> [name=<name>] [email=<email>]`
    Update(String, UserUpdate),
    /// `delete <id>`
    Delete(String),
    /// `count`
    Count,
    /// `format text|json`
    Format(OutputFormat),
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Parses a line into a command.
///
/// Blank lines and comments parse to `None`.
pub fn parse_command(line: &str) -> Outcome<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ok(None);
    }
    tokenize(trimmed).flat_map(|words| parse_words(&words)).map(Some)
}

fn parse_words(words: &[String]) -> Outcome<Command> {
    let Some((head, args)) = words.split_first() else {
        return err("empty command");
    };

    match (head.to_ascii_lowercase().as_str(), args) {
        ("create", [name, email]) => ok(Command::Create(CreateUser::new(name, email))),
        ("create", _) => usage("create <name> <email>"),
        ("get", [id]) => ok(Command::Get(id.clone())),
        ("get", _) => usage("get <id>"),
        ("list", []) => ok(Command::List),
        ("update", [id, fields @ ..]) => {
            parse_update(fields).map(|changes| Command::Update(id.clone(), changes))
        }
        ("update", []) => usage("update <id> [name=<name>] [email=<email>]"),
        ("delete", [id]) => ok(Command::Delete(id.clone())),
        ("delete", _) => usage("delete <id>"),
        ("count", []) => ok(Command::Count),
        ("format", [kind]) => kind.parse().map(Command::Format).into(),
        ("format", _) => usage("format text|json"),
        ("help", _) => ok(Command::Help),
        ("quit" | "exit", []) => ok(Command::Quit),
        ("list" | "count" | "quit" | "exit", _) => err(format!("{head} takes no arguments")),
        (other, _) => err(format!("unknown command: {other}")),
    }
}

fn parse_update(fields: &[String]) -> Outcome<UserUpdate> {
    fields.iter().fold(ok(UserUpdate::new()), |acc, field| {
        acc.flat_map(|changes| match field.split_once('=') {
            Some(("name", value)) if changes.name.is_none() => ok(changes.with_name(value)),
            Some(("email", value)) if changes.email.is_none() => ok(changes.with_email(value)),
            Some(("name" | "email", _)) => err(format!("field given twice: {field}")),
            Some((key, _)) => err(format!("unknown field: {key}")),
            None => err(format!("expected field=value, got: {field}")),
        })
    })
}

fn usage<T>(form: &str) -> Outcome<T> {
    err(format!("usage: {form}"))
}

/// Splits a line into words, honouring double quotes.
pub fn tokenize(line: &str) -> Outcome<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => return err("unterminated quote"),
            },
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return err("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    ok(words)
}

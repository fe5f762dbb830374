//! Rendering outcomes for the terminal.

use std::fmt;
use std::str::FromStr;

use keystone_foundation::Outcome;
use keystone_store::User;
use serde::Serialize;
use serde_json::json;

/// How the shell prints results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per record.
    #[default]
    Text,
    /// The `{ success, data | error }` shape as compact JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other} (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Anything the shell can print as a successful result.
pub trait Render: Serialize {
    /// Renders the value as text lines.
    fn render_text(&self) -> String;
}

impl Render for User {
    fn render_text(&self) -> String {
        self.to_string()
    }
}

impl Render for Vec<User> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "(no users)".to_string();
        }
        self.iter().map(User::to_string).collect::<Vec<_>>().join("\n")
    }
}

impl Render for bool {
    fn render_text(&self) -> String {
        let text = if *self { "deleted" } else { "not deleted" };
        text.to_string()
    }
}

impl Render for usize {
    fn render_text(&self) -> String {
        self.to_string()
    }
}

/// Renders an outcome in the requested format.
///
/// Text failures read `error: {message}`. JSON renders both arms in the
/// wire shape.
pub fn render<T: Render>(outcome: &Outcome<T>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match outcome {
            Outcome::Success(value) => value.render_text(),
            Outcome::Failure(message) => format!("error: {message}"),
        },
        OutputFormat::Json => serde_json::to_string(outcome).unwrap_or_else(|e| {
            json!({ "success": false, "error": e.to_string() }).to_string()
        }),
    }
}

/// Renders a shell-level failure (such as a parse error) in the requested format.
pub fn render_failure(message: &str, format: OutputFormat) -> String {
    render::<usize>(&Outcome::err(message), format)
}

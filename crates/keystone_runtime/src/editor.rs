//! Line editing for the interactive shell.
//!
//! The [`LineEditor`] trait keeps the loop independent of rustyline so tests
//! can script input.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::command::COMMAND_WORDS;
use crate::error::{Result, RuntimeError};

const HISTORY_SIZE: usize = 500;

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+D or end of input.
    Eof,
}

/// Source of input lines for the shell.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// Editor with no input source, for runs that only execute command files.
///
/// Every read reports end of input, and no terminal is touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEditor;

impl LineEditor for NullEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}
}

#[derive(Helper, Completer, Hinter, Validator)]
struct ShellHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;34m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Completes the command word and `update` field names.
struct CommandCompleter;

impl CommandCompleter {
    fn candidates(line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &before[start..];

        let words: &[&str] = if start == 0 {
            &COMMAND_WORDS
        } else if before.trim_start().to_ascii_lowercase().starts_with("update ") {
            &["name=", "email="]
        } else {
            &[]
        };

        let pairs = words
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: (*candidate).to_string(),
                replacement: (*candidate).to_string(),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(Self::candidates(line, pos))
    }
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialised.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(HISTORY_SIZE)
            .map_err(editor_error)?
            .build();

        let mut editor = Editor::with_config(config).map_err(editor_error)?;
        editor.set_helper(Some(ShellHelper {
            completer: CommandCompleter,
            hinter: HistoryHinter::new(),
        }));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(editor_error(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

#[allow(clippy::needless_pass_by_value)]
fn editor_error(error: ReadlineError) -> RuntimeError {
    RuntimeError::Editor(error.to_string())
}

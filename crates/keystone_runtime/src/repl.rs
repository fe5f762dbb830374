//! The interactive and batch command loop.

use std::fs;
use std::io::{self, Stdout, Write};
use std::path::Path;

use tracing::info;

use crate::config::ShellConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Result, RuntimeError};
use crate::session::{Evaluation, Session};

/// The command shell.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where results are printed.
    output: W,

    /// Store and output preferences.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a shell with the rustyline editor, printing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, config))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a shell with the given editor, printing to stdout.
    pub fn with_editor(editor: E, config: &ShellConfig) -> Self {
        Self {
            editor,
            output: io::stdout(),
            session: Session::from_config(config),
            show_banner: config.show_banner,
            prompt: config.prompt.clone(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects printed results.
    pub fn with_output<O: Write>(self, output: O) -> Repl<E, O> {
        Repl {
            editor: self.editor,
            output,
            session: self.session,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the interactive loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    if !self.eval_line(&line)? {
                        break;
                    }
                }
                ReadResult::Interrupted => writeln!(self.output)?,
                ReadResult::Eof => break,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Evaluates one line and prints its result.
    ///
    /// Returns `false` once the line asked the shell to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn eval_line(&mut self, line: &str) -> Result<bool> {
        match self.session.eval(line) {
            Evaluation::Nothing => {}
            Evaluation::Output(text) | Evaluation::Failure(text) => {
                writeln!(self.output, "{text}")?;
            }
            Evaluation::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Evaluates every line of `source` in order, stopping at `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn eval_source(&mut self, source: &str) -> Result<bool> {
        for line in source.lines() {
            if !self.eval_line(line)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Reads and evaluates a command file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or output fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<bool> {
        let source = fs::read_to_string(path).map_err(|source| RuntimeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "running command file");
        self.eval_source(&source)
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\x1b[1;36mKeystone\x1b[0m v{} - user store shell",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(
            self.output,
            "Type `help` for commands. Use Ctrl+D or `quit` to exit.\n"
        )?;
        self.output.flush()?;
        Ok(())
    }
}

//! Integration tests for the command loop

use keystone_runtime::{
    LineEditor, NullEditor, ReadResult, Repl, Result, RuntimeError, ShellConfig,
};
use std::collections::VecDeque;
use std::io::Write;

struct Script(VecDeque<ReadResult>);

impl Script {
    fn new(inputs: Vec<ReadResult>) -> Self {
        Self(inputs.into())
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.0.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn line(text: &str) -> ReadResult {
    ReadResult::Line(text.to_string())
}

fn repl(inputs: Vec<ReadResult>) -> Repl<Script, Vec<u8>> {
    Repl::with_editor(Script::new(inputs), &ShellConfig::new())
        .without_banner()
        .with_output(Vec::new())
}

#[test]
fn interrupt_does_not_end_the_session() {
    let mut shell = repl(vec![
        line("create Ann ann@x.io"),
        ReadResult::Interrupted,
        line("count"),
    ]);
    shell.run().unwrap();

    let printed = String::from_utf8(shell.into_output()).unwrap();
    assert_eq!(printed, "#1 Ann <ann@x.io>\n\n1\nGoodbye!\n");
}

#[test]
fn banner_is_printed_when_enabled() {
    let mut shell = Repl::with_editor(Script::new(vec![]), &ShellConfig::new()).with_output(Vec::new());
    shell.run().unwrap();

    let printed = String::from_utf8(shell.into_output()).unwrap();
    assert!(printed.contains("Keystone"));
    assert!(printed.ends_with("Goodbye!\n"));
}

#[test]
fn batch_file_runs_every_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# seed").unwrap();
    writeln!(file, "create Ann ann@x.io").unwrap();
    writeln!(file, "create Bob bob@x.io").unwrap();
    writeln!(file, "bogus").unwrap();
    writeln!(file, "delete 1").unwrap();

    let mut shell = repl(vec![]);
    assert!(shell.eval_file(file.path()).unwrap());
    assert_eq!(shell.session().store().len(), 1);
    assert_eq!(shell.session().parse_failures(), 1);

    let printed = String::from_utf8(shell.into_output()).unwrap();
    assert_eq!(
        printed,
        "#1 Ann <ann@x.io>\n#2 Bob <bob@x.io>\nerror: unknown command: bogus\ndeleted\n"
    );
}

#[test]
fn unreadable_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.ks");

    let mut shell = repl(vec![]);
    let error = shell.eval_file(&missing).unwrap_err();
    assert!(matches!(error, RuntimeError::ReadFile { .. }));
    assert!(error.to_string().contains("absent.ks"));
}

#[test]
fn batch_run_needs_no_terminal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "create Ann ann@x.io").unwrap();
    writeln!(file, "count").unwrap();

    let mut shell = Repl::with_editor(NullEditor, &ShellConfig::new().with_banner(false))
        .with_output(Vec::new());
    assert!(shell.eval_file(file.path()).unwrap());
    shell.run().unwrap();

    let printed = String::from_utf8(shell.into_output()).unwrap();
    assert_eq!(printed, "#1 Ann <ann@x.io>\n1\nGoodbye!\n");
}

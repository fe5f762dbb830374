//! Integration tests for shell sessions

use keystone_runtime::{Evaluation, OutputFormat, Session, ShellConfig};

fn outputs(session: &mut Session, lines: &[&str]) -> Vec<Evaluation> {
    lines.iter().map(|line| session.eval(line)).collect()
}

#[test]
fn crud_round_in_text() {
    let mut session = Session::new();
    let results = outputs(
        &mut session,
        &[
            r#"create "John Doe" john@example.com"#,
            "create Jane jane@example.com",
            "update 2 email=john@example.com",
            r#"update 2 name="Jane Q""#,
            "delete 1",
            "list",
            "get 1",
        ],
    );

    assert_eq!(
        results,
        vec![
            Evaluation::Output("#1 John Doe <john@example.com>".into()),
            Evaluation::Output("#2 Jane <jane@example.com>".into()),
            Evaluation::Failure("error: Email is already in use by another user".into()),
            Evaluation::Output("#2 Jane Q <jane@example.com>".into()),
            Evaluation::Output("deleted".into()),
            Evaluation::Output("#2 Jane Q <jane@example.com>".into()),
            Evaluation::Failure("error: User not found with ID: 1".into()),
        ]
    );
}

#[test]
fn json_output_uses_wire_shape() {
    let config = ShellConfig::new().with_output(OutputFormat::Json);
    let mut session = Session::from_config(&config);

    assert_eq!(
        session.eval("create Ann ann@x.io"),
        Evaluation::Output(r#"{"success":true,"data":{"id":1,"name":"Ann","email":"ann@x.io"}}"#.into())
    );
    assert_eq!(
        session.eval("list"),
        Evaluation::Output(r#"{"success":true,"data":[{"id":1,"name":"Ann","email":"ann@x.io"}]}"#.into())
    );
    assert_eq!(
        session.eval("create Bob ann@x.io"),
        Evaluation::Failure(r#"{"success":false,"error":"User with this email already exists"}"#.into())
    );
}

#[test]
fn empty_list_renders_placeholder() {
    let mut session = Session::new();
    assert_eq!(session.eval("list"), Evaluation::Output("(no users)".into()));
}

#[test]
fn malformed_id_is_reported() {
    let mut session = Session::new();
    match session.eval("get abc") {
        Evaluation::Failure(text) => assert!(text.starts_with("error: Invalid ID format: ")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(session.parse_failures(), 0);
}

#[test]
fn help_lists_commands() {
    let mut session = Session::new();
    let Evaluation::Output(text) = session.eval("help") else {
        panic!("help should succeed");
    };
    for word in ["create", "get", "list", "update", "delete", "format"] {
        assert!(text.contains(word), "help mentions {word}");
    }
}

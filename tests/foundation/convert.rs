//! Integration tests for value conversions
//!
//! Table-driven checks for `to_number`, `to_string`, and `to_boolean`.

use keystone_foundation::{Value, ok, to_boolean, to_number, to_string};

// =============================================================================
// to_number
// =============================================================================

#[test]
fn numbers_from_text() {
    let cases = [
        ("42", 42.0),
        ("-3.5", -3.5),
        ("  7 ", 7.0),
        ("1e3", 1000.0),
    ];
    for (text, expected) in cases {
        assert_eq!(to_number(&Value::from(text)), ok(expected), "input {text:?}");
    }
}

#[test]
fn non_numeric_text_fails() {
    for text in ["", "abc", "12abc", "NaN", "inf"] {
        assert!(to_number(&Value::from(text)).is_error(), "input {text:?}");
    }
}

#[test]
fn numbers_pass_through() {
    assert_eq!(to_number(&Value::Int(9)), ok(9.0));
    assert_eq!(to_number(&Value::Float(0.25)), ok(0.25));
}

#[test]
fn absent_values_are_not_numbers() {
    assert!(to_number(&Value::Null).is_error());
    assert!(to_number(&Value::Undefined).is_error());
    assert!(to_number(&Value::Bool(true)).is_error());
}

// =============================================================================
// to_string
// =============================================================================

#[test]
fn strings_from_scalars() {
    let cases = [
        (Value::Null, "null"),
        (Value::Undefined, "undefined"),
        (Value::Bool(true), "true"),
        (Value::Int(12), "12"),
        (Value::Float(2.5), "2.5"),
        (Value::Float(3.0), "3"),
        (Value::from("hi"), "hi"),
    ];
    for (value, expected) in cases {
        assert_eq!(to_string(&value), ok(expected.to_string()), "value {value:?}");
    }
}

#[test]
fn collections_do_not_stringify() {
    assert!(to_string(&Value::from(vec![1, 2])).is_error());
}

// =============================================================================
// to_boolean
// =============================================================================

#[test]
fn booleans_from_text_and_numbers() {
    let cases = [
        (Value::Bool(false), false),
        (Value::from("true"), true),
        (Value::from("FALSE"), false),
        (Value::Int(1), true),
        (Value::Int(0), false),
        (Value::Float(1.0), true),
    ];
    for (value, expected) in cases {
        assert_eq!(to_boolean(&value), ok(expected), "value {value:?}");
    }
}

#[test]
fn ambiguous_booleans_fail() {
    assert_eq!(
        to_boolean(&Value::from("yes")).error(),
        Some(r#"cannot convert "yes" to boolean"#)
    );
    assert_eq!(
        to_boolean(&Value::Int(2)).error(),
        Some("cannot convert number 2 to boolean")
    );
    assert!(to_boolean(&Value::Null).is_error());
}

use casekit_derive::casekit_error;
use std::borrow::Cow;

#[casekit_error]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<String, ParseError> {
    let text = std::fs::read_to_string("/definitely/not/here.csv").context("Reading rows")?;
    Ok(text)
}

#[test]
fn casekit_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/casekit_error_pass.rs");
    t.pass("tests/ui/casekit_error_unit_only.rs");
}

#[test]
fn kind_names_the_variant() {
    assert_eq!(ParseError::Empty.kind(), "Empty");
    assert_eq!(ParseError::from("boom").kind(), "Internal");
}

#[test]
fn unit_variant_displays_without_context() {
    let err: Result<(), ParseError> = Err(ParseError::Empty);
    let err = err.context("ignored for unit variants").unwrap_err();
    assert_eq!(err.to_string(), "input is empty");
}

#[test]
fn source_errors_convert_with_context() {
    let err = missing_file().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().starts_with("IO error (Reading rows): "), "got: {err}");
}

#[test]
fn internal_accepts_owned_and_borrowed_messages() {
    let borrowed = ParseError::from("static message");
    let owned = ParseError::from(format!("row {}", 3));

    assert_eq!(borrowed.to_string(), "Internal parse error: static message");
    assert_eq!(owned.to_string(), "Internal parse error: row 3");

    let with_context: Result<(), ParseError> = Err(owned);
    let err = with_context.context("line 7").unwrap_err();
    assert_eq!(err.to_string(), "Internal parse error (line 7): row 3");
}

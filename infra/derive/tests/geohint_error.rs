use geohint_derive::geohint_error;
use std::borrow::Cow;

#[geohint_error]
pub enum SampleError {
    #[error("Number error{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Lookup failed{}: {message}", format_context(.context))]
    Lookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_count(raw: &str) -> Result<u32, SampleError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn geohint_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/geohint_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse_count("twelve").unwrap_err();
    assert!(matches!(err, SampleError::Number { context: None, .. }));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "x".parse::<u32>().context("Reading stripe count").unwrap_err();
    assert!(err.to_string().starts_with("Number error (Reading stripe count): "));
}

#[test]
fn context_is_attached_to_own_results() {
    let res: Result<(), SampleError> =
        Err(SampleError::Lookup { message: "language".into(), context: None });
    let err = res.context("Street table").unwrap_err();
    assert_eq!(err.to_string(), "Lookup failed (Street table): language");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();
    assert_eq!(from_static.to_string(), "Internal sample error: boom");
    assert!(matches!(from_owned, SampleError::Internal { .. }));
}

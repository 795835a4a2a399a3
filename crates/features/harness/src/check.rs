//! Assertions for case bodies.
//!
//! Every check returns `Result<(), CaseFailure>` so a body stops at the first failed
//! check with `?`. Use [`Group`] (or [`all`]) when every check of a block must run
//! before the case fails.

use crate::error::HarnessError;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Debug};
use std::io;

/// Why a single invocation did not pass.
#[casekit_derive::casekit_error]
pub enum CaseFailure {
    /// A check did not hold.
    #[error("{message}{}", format_context(.context))]
    Assertion { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// One or more checks of a grouped block did not hold.
    #[error(
        "{} of {checked} grouped checks failed{}: {}",
        failed_count(.failures),
        format_context(.context),
        join_failures(.failures)
    )]
    Grouped { failures: Vec<Self>, checked: usize, context: Option<Cow<'static, str>> },

    /// An assumption did not hold; the invocation is skipped, not failed.
    #[error("Assumption not met{}: {reason}", format_context(.context))]
    Skipped { reason: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The code under test returned an error.
    #[error("{source}{}", format_context(.context))]
    Unexpected { source: RaisedError, context: Option<Cow<'static, str>> },

    /// The invocation's arguments did not fit the body's parameters.
    #[error("{source}")]
    Argument { source: HarnessError, context: Option<Cow<'static, str>> },
}

const fn failed_count(failures: &[CaseFailure]) -> usize {
    failures.len()
}

fn join_failures(failures: &[CaseFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl CaseFailure {
    /// Kind recorded in the report: the variant name, or for [`CaseFailure::Unexpected`]
    /// the kind of the raised error (e.g., `DivisionByZero`).
    #[must_use]
    pub fn failure_kind(&self) -> Cow<'static, str> {
        match self {
            Self::Unexpected { source, .. } => source.kind.clone(),
            other => Cow::Borrowed(other.kind()),
        }
    }
}

/// A detached copy of an error raised by the code under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    kind: Cow<'static, str>,
    message: String,
}

impl RaisedError {
    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self { kind: kind.into(), message: message.into() }
    }

    /// Captures `err`. The kind is the [`io::ErrorKind`] of an IO error, the variant
    /// name of an enum error with derived `Debug`, or the error's type name.
    pub fn capture<E: Error + 'static>(err: &E) -> Self {
        let raised: &(dyn Error + 'static) = err;
        let kind = if let Some(io) = raised.downcast_ref::<io::Error>() {
            Cow::Owned(format!("{:?}", io.kind()))
        } else {
            variant_name(&format!("{err:?}"))
                .map_or(Cow::Borrowed(short_type_name::<E>()), |name| Cow::Owned(name.to_owned()))
        };
        Self { kind, message: err.to_string() }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for RaisedError {}

/// Leading identifier of a derived `Debug` rendering (`Name`, `Name { .. }`, `Name(..)`).
fn variant_name(debug: &str) -> Option<&str> {
    let end = debug.find(|c: char| !(c.is_alphanumeric() || c == '_')).unwrap_or(debug.len());
    let (ident, rest) = debug.split_at(end);
    let derived = rest.is_empty() || rest.starts_with(" {") || rest.starts_with('(');
    (ident.starts_with(|c: char| c.is_ascii_uppercase()) && derived).then_some(ident)
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Turns a domain error into a [`CaseFailure::Unexpected`] so `?` can propagate it.
pub trait OrFail<T> {
    /// # Errors
    /// Returns [`CaseFailure::Unexpected`] carrying the original error's kind and message.
    fn or_fail(self) -> Result<T, CaseFailure>;
}

impl<T, E: Error + 'static> OrFail<T> for Result<T, E> {
    fn or_fail(self) -> Result<T, CaseFailure> {
        self.map_err(|err| CaseFailure::Unexpected {
            source: RaisedError::capture(&err),
            context: None,
        })
    }
}

fn assertion(message: impl Into<Cow<'static, str>>) -> CaseFailure {
    CaseFailure::Assertion { message: message.into(), context: None }
}

fn prefixed(message: Cow<'static, str>, detail: &str) -> String {
    if message.is_empty() { detail.to_owned() } else { format!("{message} ==> {detail}") }
}

/// A failure to return directly from a body.
pub fn fail(message: impl Into<Cow<'static, str>>) -> CaseFailure {
    assertion(message)
}

/// # Errors
/// Fails with `message` when `condition` is false.
pub fn check(condition: bool, message: impl Into<Cow<'static, str>>) -> Result<(), CaseFailure> {
    if condition { Ok(()) } else { Err(assertion(message)) }
}

/// # Errors
/// Fails with `message` when `condition` is true.
pub fn check_false(
    condition: bool,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), CaseFailure> {
    check(!condition, message)
}

/// Like [`check`], but the message is built only when the check fails.
///
/// # Errors
/// Fails with the message produced by `message` when `condition` is false.
pub fn check_with<M, F>(condition: bool, message: F) -> Result<(), CaseFailure>
where
    M: Into<Cow<'static, str>>,
    F: FnOnce() -> M,
{
    if condition { Ok(()) } else { Err(assertion(message())) }
}

/// # Errors
/// Fails with `expected: <..> but was: <..>` when the values differ.
pub fn check_eq<T>(
    expected: T,
    actual: T,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), CaseFailure>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        return Ok(());
    }
    let detail = format!("expected: <{expected:?}> but was: <{actual:?}>");
    Err(assertion(prefixed(message.into(), &detail)))
}

/// # Errors
/// Fails when the values are equal.
pub fn check_ne<T>(
    unexpected: T,
    actual: T,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), CaseFailure>
where
    T: PartialEq + Debug,
{
    if unexpected != actual {
        return Ok(());
    }
    let detail = format!("expected: not equal but was: <{actual:?}>");
    Err(assertion(prefixed(message.into(), &detail)))
}

/// Unwraps `value`.
///
/// # Errors
/// Fails with `message` when `value` is `None`.
pub fn check_some<T>(
    value: Option<T>,
    message: impl Into<Cow<'static, str>>,
) -> Result<T, CaseFailure> {
    value.ok_or_else(|| assertion(prefixed(message.into(), "expected a value but was: <None>")))
}

/// Runs `call` and returns the error it raised.
///
/// # Errors
/// Fails when `call` succeeds.
pub fn expect_err<T, E, F>(call: F) -> Result<E, CaseFailure>
where
    T: Debug,
    F: FnOnce() -> Result<T, E>,
{
    match call() {
        Ok(value) => Err(assertion(format!("expected an error but got: <{value:?}>"))),
        Err(err) => Ok(err),
    }
}

/// Skips the rest of the body when `condition` is false.
///
/// # Errors
/// Returns [`CaseFailure::Skipped`] with `reason` when `condition` is false.
pub fn assume(condition: bool, reason: impl Into<Cow<'static, str>>) -> Result<(), CaseFailure> {
    if condition {
        Ok(())
    } else {
        Err(CaseFailure::Skipped { reason: reason.into(), context: None })
    }
}

/// Runs `body` only when `condition` holds; otherwise passes.
///
/// # Errors
/// Whatever `body` returns.
pub fn assume_that<F>(condition: bool, body: F) -> Result<(), CaseFailure>
where
    F: FnOnce() -> Result<(), CaseFailure>,
{
    if condition { body() } else { Ok(()) }
}

/// Accumulates checks so that every one of them runs before the case fails.
///
/// ```rust
/// use casekit_harness::{Group, check, check_eq};
///
/// let mut group = Group::named("record");
/// group.record(check_eq("v1", "v1", "version"));
/// group.record(check(false, "author"));
/// group.record(check_eq(2, 4, ""));
///
/// let failure = group.finish().unwrap_err();
/// assert!(failure.to_string().starts_with("2 of 3 grouped checks failed (record)"));
/// ```
#[derive(Debug, Default)]
pub struct Group {
    heading: Option<Cow<'static, str>>,
    failures: Vec<CaseFailure>,
    checked: usize,
}

impl Group {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(heading: impl Into<Cow<'static, str>>) -> Self {
        Self { heading: Some(heading.into()), ..Self::default() }
    }

    /// Records the outcome of one check.
    pub fn record(&mut self, outcome: Result<(), CaseFailure>) -> &mut Self {
        self.checked += 1;
        if let Err(failure) = outcome {
            self.failures.push(failure);
        }
        self
    }

    #[must_use]
    pub const fn checked(&self) -> usize {
        self.checked
    }

    /// # Errors
    /// Returns [`CaseFailure::Grouped`] with every recorded failure, in order.
    pub fn finish(self) -> Result<(), CaseFailure> {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(CaseFailure::Grouped {
            failures: self.failures,
            checked: self.checked,
            context: self.heading,
        })
    }
}

/// Grouped assertion over already evaluated checks.
///
/// # Errors
/// Returns [`CaseFailure::Grouped`] when any check failed.
pub fn all(
    heading: impl Into<Cow<'static, str>>,
    checks: impl IntoIterator<Item = Result<(), CaseFailure>>,
) -> Result<(), CaseFailure> {
    let mut group = Group::named(heading);
    for outcome in checks {
        group.record(outcome);
    }
    group.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, thiserror::Error)]
    enum SampleError {
        #[error("nothing to see")]
        Empty,
        #[error("bad input {0}")]
        Bad(i32),
    }

    #[test]
    fn check_eq_reports_expected_and_actual() {
        let failure = check_eq(2, 4, "").unwrap_err();
        assert_eq!(failure.to_string(), "expected: <2> but was: <4>");

        let failure = check_eq("Unknown Name", "MyApp", "name").unwrap_err();
        assert_eq!(failure.to_string(), r#"name ==> expected: <"Unknown Name"> but was: <"MyApp">"#);
        assert_eq!(failure.failure_kind(), "Assertion");
    }

    #[test]
    fn lazy_message_is_built_only_on_failure() {
        let built = Cell::new(0);
        let message = || {
            built.set(built.get() + 1);
            "expensive"
        };

        assert!(check_with(true, message).is_ok());
        assert_eq!(built.get(), 0);

        let failure = check_with(false, message).unwrap_err();
        assert_eq!(built.get(), 1);
        assert_eq!(failure.to_string(), "expensive");
    }

    #[test]
    fn group_runs_every_check_and_keeps_order() {
        let mut group = Group::new();
        group.record(check(false, "first"));
        group.record(check(true, "second"));
        group.record(check(false, "third"));
        assert_eq!(group.checked(), 3);

        match group.finish().unwrap_err() {
            CaseFailure::Grouped { failures, checked, .. } => {
                assert_eq!(checked, 3);
                let messages: Vec<_> = failures.iter().map(ToString::to_string).collect();
                assert_eq!(messages, ["first", "third"]);
            },
            other => panic!("expected grouped failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_group_passes() {
        assert!(Group::named("nothing").finish().is_ok());
        assert!(all("fine", [check(true, "a"), check_ne(1, 2, "b")]).is_ok());
    }

    #[test]
    fn assumptions_skip_or_run() {
        let skipped = assume(false, "not on this platform").unwrap_err();
        assert_eq!(skipped.kind(), "Skipped");

        let ran = Cell::new(false);
        assert!(
            assume_that(false, || {
                ran.set(true);
                Ok(())
            })
            .is_ok()
        );
        assert!(!ran.get());
        assert!(assume_that(true, || check(false, "inner")).is_err());
    }

    #[test]
    fn expect_err_returns_the_error() {
        let err = expect_err(|| Err::<(), _>(SampleError::Bad(3))).unwrap();
        assert!(matches!(err, SampleError::Bad(3)));

        let failure = expect_err(|| Ok::<_, SampleError>(7)).unwrap_err();
        assert_eq!(failure.to_string(), "expected an error but got: <7>");
    }

    #[test]
    fn or_fail_records_variant_kind() {
        let failure = Err::<(), _>(SampleError::Empty).or_fail().unwrap_err();
        assert_eq!(failure.failure_kind(), "Empty");
        assert_eq!(failure.to_string(), "Empty: nothing to see");

        let failure = Err::<(), _>(SampleError::Bad(1)).or_fail().unwrap_err();
        assert_eq!(failure.failure_kind(), "Bad");
    }

    #[test]
    fn or_fail_records_io_error_kind() {
        let failure = std::fs::read_to_string("/casekit/no/such/file").or_fail().unwrap_err();
        assert_eq!(failure.failure_kind(), "NotFound");

        let failure = Err::<(), _>(io::Error::other("x")).or_fail().unwrap_err();
        assert_eq!(failure.failure_kind(), "Other");
    }

    #[derive(thiserror::Error)]
    #[error("disk is full")]
    struct OpaqueError;

    impl Debug for OpaqueError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk is full")
        }
    }

    #[test]
    fn opaque_debug_falls_back_to_type_name() {
        let failure = Err::<(), _>(OpaqueError).or_fail().unwrap_err();
        assert_eq!(failure.failure_kind(), "OpaqueError");
        assert_eq!(failure.to_string(), "OpaqueError: disk is full");
    }

    #[test]
    fn variant_name_accepts_only_derived_shapes() {
        assert_eq!(variant_name("Empty"), Some("Empty"));
        assert_eq!(variant_name("Bad(1)"), Some("Bad"));
        assert_eq!(variant_name("Io { source: .. }"), Some("Io"));
        assert_eq!(variant_name("disk is full"), None);
        assert_eq!(variant_name("Disk is full"), None);
        assert_eq!(variant_name(""), None);
    }

    #[test]
    fn check_some_unwraps() {
        assert_eq!(check_some(Some(5), "value").unwrap(), 5);
        assert!(check_some(None::<i32>, "value").is_err());
    }
}

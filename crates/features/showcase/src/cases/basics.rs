//! Plain, grouped, error-testing, assumption, disabled and repeated cases.

use casekit_arithmetic::{ArithmeticError, divide};
use casekit_domain::ValueRecord;
use casekit_harness::{
    CaseFailure, CaseSpec, Group, HarnessError, Invocation, OrFail, Suite, assume, assume_that,
    check, check_eq, check_with, expect_err,
};

pub(crate) const META_DISPLAY_NAME: &str =
    "Getting test related information from within the test using dependency injection";
pub(crate) const REPEAT_DISPLAY_NAME: &str = "Repeat test";

pub(crate) fn register(suite: &mut Suite) -> Result<(), HarnessError> {
    suite
        .register(
            CaseSpec::new("simple_assert_statement", simple_assert_statement)
                .display_name("Simple assert statement"),
        )?
        .register(CaseSpec::new("lazy_assert_message", lazy_assert_message).display_name(
            "Assertion messages can be lazily evaluated using a closure to avoid constructing \
             complex messages unnecessarily",
        ))?
        .register(CaseSpec::new("case_metadata", case_metadata).display_name(META_DISPLAY_NAME))?
        .register(
            CaseSpec::new("grouped_assertions", grouped_assertions)
                .display_name("Grouped assertions test"),
        )?
        .register(CaseSpec::new("error_testing", error_testing).display_name("Error testing"))?
        .register(CaseSpec::new("assumptions", assumptions).display_name("Test assumptions"))?
        .register(
            CaseSpec::new("do_not_run", do_not_run)
                .display_name("Disabled test")
                .disabled("Disabled until the expected value is decided"),
        )?
        .register(
            CaseSpec::repeated("custom_display_name", 2, custom_display_name)
                .display_name(REPEAT_DISPLAY_NAME)
                .name_template("{displayName} {currentRepetition}/{totalRepetitions}"),
        )?;
    Ok(())
}

const fn two_equals_one() -> bool {
    2 == 1
}

fn simple_assert_statement(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    check(two_equals_one(), "Two is not equal to one")
}

fn lazy_assert_message(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    check_with(two_equals_one(), || "Two is not equal to one")
}

fn case_metadata(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    check_eq(inv.info().display_name(), META_DISPLAY_NAME, "display name")
}

fn grouped_assertions(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    let app = ValueRecord::new("MyApp", "v1", "Ravi");

    let mut group = Group::named("app");
    group
        .record(check_eq("Unknown Name", app.name(), "name"))
        .record(check_eq("v1", app.version(), "version"))
        .record(check_eq("Sankar", app.author(), "author"))
        .record(check_eq(2, 4, "Custom error message in check_eq"));
    group.finish()
}

fn error_testing(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    let err = expect_err(|| divide(1, 0))?;
    check_eq(&err, &ArithmeticError::DivisionByZero, "error kind")?;
    check_eq(err.to_string().as_str(), "attempt to divide by zero", "error message")
}

fn assumptions(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    let on_windows = cfg!(windows);
    assume(on_windows, "requires a Windows host")?;
    assume_that(on_windows, || check_eq(divide(11, 4).or_fail()?, 2, "11 / 4"))
}

fn do_not_run(_: &Invocation<'_>) -> Result<(), CaseFailure> {
    check_eq("1", "2", "")
}

fn custom_display_name(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    let info = inv.info();
    let repetition = info.repetition().ok_or_else(|| casekit_harness::fail("not a repetition"))?;
    let expected =
        format!("{REPEAT_DISPLAY_NAME} {}/{}", repetition.current, repetition.total);
    check_eq(info.display_name(), expected.as_str(), "display name")
}

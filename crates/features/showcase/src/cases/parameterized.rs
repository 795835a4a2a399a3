//! Cases driven by literal values, symbols, providers and tabular rows.

use casekit_arithmetic::{divide, length};
use casekit_domain::TimeUnit;
use casekit_harness::{
    Arguments, CaseFailure, CaseSource, CaseSpec, CsvFormat, HarnessError, Invocation, OrFail,
    Suite, args, check, check_eq, check_false, check_some,
};

pub(crate) const WORDS_FILE: &str = "test.csv";
pub(crate) const DIVISION_FILE: &str = "division_input.csv";

pub(crate) fn register(suite: &mut Suite) -> Result<(), HarnessError> {
    suite
        .register(
            CaseSpec::parameterized("value_source", CaseSource::values([1, 2, 3]), value_source)
                .display_name("Test with value source"),
        )?
        .register(
            CaseSpec::parameterized(
                "enum_source_exclude",
                CaseSource::symbols_excluding::<TimeUnit, _>(["DAYS", "HOURS"]),
                enum_source_exclude,
            )
            .display_name("Test with enum source")
            .name_template("{index} => argument : {0}"),
        )?
        .register(
            CaseSpec::parameterized(
                "method_source",
                CaseSource::method(string_provider),
                method_source,
            )
            .display_name("Test with method source"),
        )?
        .register(
            CaseSpec::parameterized(
                "csv_source",
                CaseSource::csv(["foo, 1", "bar, 2", "'foo, bar', 3", "fb, ''", "fb, "]),
                csv_source,
            )
            .display_name("Test with csv source")
            .name_template("{index} ==> first=''{0}'', second={1}"),
        )?
        .register(
            CaseSpec::parameterized(
                "csv_file_source",
                CaseSource::csv_file_with(WORDS_FILE, CsvFormat::file().skip_lines(1)),
                csv_file_source,
            )
            .display_name("Test with csv file source")
            .name_template("{index} ==> word = ''{0}'', length = {1}"),
        )?
        .register(
            CaseSpec::parameterized(
                "csv_file_division",
                CaseSource::csv_file_with(DIVISION_FILE, CsvFormat::file().skip_lines(1)),
                csv_file_division,
            )
            .display_name("Test with csv file source with 3 inputs")
            .name_template("{index} ==> arg1 = {0}, arg2 = {1}, result = {2}"),
        )?;
    Ok(())
}

fn value_source(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    let argument: i32 = inv.arg(0)?;
    check_eq(divide(argument, argument).or_fail()?, 1, "x / x")
}

fn enum_source_exclude(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    let unit: TimeUnit = inv.args().symbol(0)?;
    check_false([TimeUnit::Days, TimeUnit::Hours].contains(&unit), "excluded unit was produced")?;
    check(unit.as_ref().len() > 5, "unit name is too short")
}

fn string_provider() -> Vec<Arguments> {
    vec![args!["foo", 1], args!["bar", 2]]
}

fn method_source(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    check_some(inv.arg::<Option<String>>(0)?, "first")?;
    let second: i32 = inv.arg(1)?;
    check(second > 0, "Should be greater than zero")
}

fn csv_source(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    check_some(inv.arg::<Option<String>>(0)?, "first")?;
    check_some(inv.arg::<Option<String>>(1)?, "second")?;
    Ok(())
}

fn csv_file_source(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    let word: String = inv.arg(0)?;
    let expected: usize = inv.arg(1)?;
    check_eq(length(&word), expected, "length")
}

fn csv_file_division(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
    let (a, b, result): (i32, i32, i32) = (inv.arg(0)?, inv.arg(1)?, inv.arg(2)?);
    check_eq(divide(a, b).or_fail()?, result, "quotient")
}

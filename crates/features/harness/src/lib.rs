//! # Case Harness
//!
//! Runs one case body against a sequence of argument tuples and records an outcome per
//! tuple.
//!
//! * Cases are registered explicitly in a [`Suite`]; names are unique and order is kept.
//! * A [`CaseSource`] describes the tuples: a single run, repetitions, literal values,
//!   a provider function, members of a symbol set, or tabular rows (inline or file).
//! * Bodies return `Result<(), CaseFailure>`; see [`check`], [`Group`] and [`assume`].
//! * The [`Runner`] invokes every tuple exactly once, catching failures and panics, and
//!   returns a flat [`Report`].
//!
//! ## Example
//!
//! ```rust
//! use casekit_harness::{CaseFailure, CaseSource, CaseSpec, Invocation, Runner, Suite, check};
//!
//! fn positive(inv: &Invocation<'_>) -> Result<(), CaseFailure> {
//!     let n: i32 = inv.arg(1)?;
//!     check(n > 0, "second argument must be positive")
//! }
//!
//! let mut suite = Suite::new("example");
//! suite
//!     .register(CaseSpec::parameterized("positive", CaseSource::csv(["foo, 1", "bar, 2"]), positive))
//!     .unwrap();
//!
//! let report = Runner::default().run(&suite);
//! assert_eq!(report.passed(), 2);
//! ```

mod args;
mod check;
pub mod csv;
mod error;
mod name;
mod report;
mod runner;
mod source;
mod suite;

pub use crate::args::{Argument, Arguments, FromArgument};
pub use crate::check::{
    CaseFailure, CaseFailureExt, Group, OrFail, RaisedError, all, assume, assume_that, check,
    check_eq, check_false, check_ne, check_some, check_with, expect_err, fail,
};
pub use crate::csv::{CsvFormat, CsvRows};
pub use crate::error::{HarnessError, HarnessErrorExt};
pub use crate::name::render_name;
pub use crate::report::{CaseRecord, Outcome, Report};
pub use crate::runner::{Runner, RunnerOptions};
pub use crate::source::{CaseIter, CaseSource, Provider, SymbolMode};
pub use crate::suite::{CaseFn, CaseInfo, CaseSpec, Invocation, Repetition, Suite};

//! # Showcase
//!
//! The tutorial suite: one case per harness feature, run against [`ValueRecord`] and
//! the arithmetic utilities. Several cases fail on purpose (plain and lazy assertions,
//! grouped assertions, the null row of the inline table) to show how failures are
//! reported; the assumption case is skipped on hosts other than Windows.
//!
//! [`ValueRecord`]: casekit_domain::ValueRecord

mod cases;

use casekit_harness::{HarnessError, Suite};
use std::path::PathBuf;

pub const SUITE_NAME: &str = "showcase";

/// Builds the showcase suite in registration order.
///
/// # Errors
/// Returns [`HarnessError`] if a case cannot be registered.
pub fn suite() -> Result<Suite, HarnessError> {
    let mut suite = Suite::new(SUITE_NAME);
    cases::basics::register(&mut suite)?;
    cases::parameterized::register(&mut suite)?;
    tracing::debug!(suite = SUITE_NAME, cases = suite.len(), "Showcase suite built");
    Ok(suite)
}

/// The bundled resources directory (`test.csv`, `division_input.csv`).
#[must_use]
pub fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

use crate::check::CaseFailure;
use std::borrow::Cow;
use std::fmt;

/// Result of one invocation (or of a case that never ran).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { kind: Cow<'static, str>, message: String },
    Skipped { reason: String },
}

impl Outcome {
    pub fn failed(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Failed { kind: kind.into(), message: message.into() }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Failure kind, if failed.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Failed { kind, .. } => Some(kind.as_ref()),
            _ => None,
        }
    }
}

impl From<CaseFailure> for Outcome {
    fn from(failure: CaseFailure) -> Self {
        match failure {
            CaseFailure::Skipped { reason, .. } => Self::Skipped { reason: reason.into_owned() },
            other => Self::Failed { kind: other.failure_kind(), message: other.to_string() },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Failed { kind, message } => write!(f, "failed [{kind}]: {message}"),
            Self::Skipped { reason } => write!(f, "skipped: {reason}"),
        }
    }
}

/// Outcome of one invocation, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub(crate) case: String,
    pub(crate) display_name: String,
    pub(crate) index: Option<usize>,
    pub(crate) outcome: Outcome,
}

impl CaseRecord {
    #[must_use]
    pub fn case(&self) -> &str {
        &self.case
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// 1-based invocation index; `None` for records about the case as a whole
    /// (disabled, or a source that produced nothing).
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Every record of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    suite: String,
    records: Vec<CaseRecord>,
}

impl Report {
    pub fn new(suite: impl Into<String>) -> Self {
        Self { suite: suite.into(), records: Vec::new() }
    }

    pub(crate) fn push(&mut self, record: CaseRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    #[must_use]
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Records of one case, in invocation order.
    pub fn for_case<'a>(&'a self, case: &'a str) -> impl Iterator<Item = &'a CaseRecord> + 'a {
        self.records.iter().filter(move |record| record.case == case)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseRecord> {
        self.records.iter().filter(|record| record.outcome.is_failed())
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|record| record.outcome.is_passed()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.records.iter().filter(|record| record.outcome.is_skipped()).count()
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.records.len()
    }

    /// `true` when no record failed. Skipped records do not count against success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(case: &str, index: usize, outcome: Outcome) -> CaseRecord {
        CaseRecord {
            case: case.to_owned(),
            display_name: format!("[{index}]"),
            index: Some(index),
            outcome,
        }
    }

    #[test]
    fn counts_and_success() {
        let mut report = Report::new("counts");
        report.push(record("a", 1, Outcome::Passed));
        report.push(record("a", 2, Outcome::Skipped { reason: "later".to_owned() }));
        assert!(report.is_success());

        report.push(record("b", 1, Outcome::failed("Assertion", "nope")));
        assert_eq!((report.passed(), report.failed(), report.skipped()), (1, 1, 1));
        assert_eq!(report.total(), 3);
        assert!(!report.is_success());
        assert_eq!(report.for_case("a").count(), 2);
        assert_eq!(report.failures().next().and_then(|r| r.outcome().kind()), Some("Assertion"));
    }

    #[test]
    fn skipped_failure_becomes_skipped_outcome() {
        let outcome = Outcome::from(CaseFailure::Skipped { reason: "windows only".into(), context: None });
        assert_eq!(outcome, Outcome::Skipped { reason: "windows only".to_owned() });
        assert_eq!(outcome.to_string(), "skipped: windows only");
    }
}

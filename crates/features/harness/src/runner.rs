use crate::error::HarnessError;
use crate::name::render_name;
use crate::report::{CaseRecord, Outcome, Report};
use crate::source::CaseSource;
use crate::suite::{CaseFn, CaseInfo, CaseSpec, Invocation, Repetition, Suite};
use casekit_domain::config::RunnerConfig;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Where file sources live and which cases to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerOptions {
    pub resources_dir: PathBuf,
    /// Substring a case name must contain to run.
    pub filter: Option<String>,
}

impl From<&RunnerConfig> for RunnerOptions {
    fn from(config: &RunnerConfig) -> Self {
        Self {
            resources_dir: config.resources_dir.clone().unwrap_or_default(),
            filter: config.filter.clone(),
        }
    }
}

/// Sequential executor of a [`Suite`].
///
/// Every tuple is invoked exactly once and recorded on its own. A failing, skipped or
/// panicking invocation never stops later invocations or later cases.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    #[must_use]
    pub const fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Whether `case` passes the name filter.
    #[must_use]
    pub fn selects(&self, case: &CaseSpec) -> bool {
        self.options.filter.as_deref().is_none_or(|filter| case.name().contains(filter))
    }

    pub fn run(&self, suite: &Suite) -> Report {
        info!(suite = %suite.name(), cases = suite.len(), "Running suite");
        let mut report = Report::new(suite.name());

        for case in suite.cases() {
            if self.selects(case) {
                self.run_case(case, &mut report);
            } else {
                debug!(case = %case.name(), "Case filtered out");
            }
        }

        info!(
            suite = %suite.name(),
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Suite finished"
        );
        report
    }

    fn run_case(&self, case: &CaseSpec, report: &mut Report) {
        if let Some(reason) = case.disabled_reason() {
            info!(case = %case.name(), %reason, "Case disabled");
            report.push(CaseRecord {
                case: case.name().to_owned(),
                display_name: case.label().to_owned(),
                index: None,
                outcome: Outcome::Skipped { reason: reason.to_owned() },
            });
            return;
        }

        let total = match case.source() {
            CaseSource::Repeated(total) => Some(*total),
            _ => None,
        };
        let mut invocations = 0;

        for (offset, tuple) in case.source().cases_in(&self.options.resources_dir).enumerate() {
            let index = offset + 1;
            invocations = index;

            let (display_name, outcome) = match tuple {
                Ok(args) => {
                    let repetition = total
                        .zip(u32::try_from(index).ok())
                        .map(|(total, current)| Repetition { current, total });
                    let info = CaseInfo {
                        name: case.name().to_owned(),
                        display_name: render_name(case.template(), case.label(), index, &args, repetition),
                        index,
                        repetition,
                    };
                    let outcome = invoke(case.body(), &Invocation::new(&info, &args));
                    (info.display_name, outcome)
                },
                Err(err) => (format!("[{index}] {}", case.label()), source_failure(&err)),
            };

            match &outcome {
                Outcome::Passed => debug!(case = %case.name(), invocation = %display_name, "Passed"),
                Outcome::Skipped { reason } => {
                    info!(case = %case.name(), invocation = %display_name, %reason, "Skipped");
                },
                Outcome::Failed { kind, message } => {
                    warn!(case = %case.name(), invocation = %display_name, %kind, %message, "Failed");
                },
            }

            report.push(CaseRecord {
                case: case.name().to_owned(),
                display_name,
                index: Some(index),
                outcome,
            });
        }

        if invocations == 0 {
            warn!(case = %case.name(), "Case source produced no arguments");
            report.push(CaseRecord {
                case: case.name().to_owned(),
                display_name: case.label().to_owned(),
                index: None,
                outcome: Outcome::failed("EmptySource", "case source produced no arguments"),
            });
        }

        info!(case = %case.name(), invocations, "Case finished");
    }
}

fn invoke(body: CaseFn, invocation: &Invocation<'_>) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| body(invocation))) {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(failure)) => Outcome::from(failure),
        Err(payload) => Outcome::failed("Panic", panic_message(payload.as_ref())),
    }
}

fn source_failure(err: &HarnessError) -> Outcome {
    Outcome::failed(err.kind(), err.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

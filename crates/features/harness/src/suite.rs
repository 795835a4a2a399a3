use crate::args::{Arguments, FromArgument};
use crate::check::CaseFailure;
use crate::error::HarnessError;
use crate::source::CaseSource;
use fxhash::FxHashSet;

/// Body of a case. Receives one invocation at a time.
pub type CaseFn = fn(&Invocation<'_>) -> Result<(), CaseFailure>;

/// Position of an invocation within a repeated case, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    pub current: u32,
    pub total: u32,
}

/// Metadata of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInfo {
    pub(crate) name: String,
    pub(crate) display_name: String,
    pub(crate) index: usize,
    pub(crate) repetition: Option<Repetition>,
}

impl CaseInfo {
    /// Registered case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered display name of this invocation.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// 1-based invocation index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn repetition(&self) -> Option<Repetition> {
        self.repetition
    }
}

/// What a case body sees: its metadata and its arguments.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    info: &'a CaseInfo,
    args: &'a Arguments,
}

impl<'a> Invocation<'a> {
    #[must_use]
    pub const fn new(info: &'a CaseInfo, args: &'a Arguments) -> Self {
        Self { info, args }
    }

    #[must_use]
    pub const fn info(&self) -> &'a CaseInfo {
        self.info
    }

    #[must_use]
    pub const fn args(&self) -> &'a Arguments {
        self.args
    }

    /// Shorthand for `self.args().get(index)`.
    ///
    /// # Errors
    /// See [`Arguments::get`].
    pub fn arg<T: FromArgument>(&self, index: usize) -> Result<T, HarnessError> {
        self.args.get(index)
    }
}

/// A case as registered: name, body, source and presentation.
#[derive(Debug, Clone)]
pub struct CaseSpec {
    name: String,
    body: CaseFn,
    source: CaseSource,
    display_name: Option<String>,
    name_template: Option<String>,
    disabled: Option<String>,
}

impl CaseSpec {
    /// A plain case, invoked once without arguments.
    pub fn new(name: impl Into<String>, body: CaseFn) -> Self {
        Self::parameterized(name, CaseSource::Single, body)
    }

    /// A case invoked once per tuple of `source`.
    pub fn parameterized(name: impl Into<String>, source: CaseSource, body: CaseFn) -> Self {
        Self {
            name: name.into(),
            body,
            source,
            display_name: None,
            name_template: None,
            disabled: None,
        }
    }

    /// A case invoked `times` times without arguments.
    pub fn repeated(name: impl Into<String>, times: u32, body: CaseFn) -> Self {
        Self::parameterized(name, CaseSource::repeated(times), body)
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Template for invocation display names (see [`crate::render_name`]).
    #[must_use]
    pub fn name_template(mut self, template: impl Into<String>) -> Self {
        self.name_template = Some(template.into());
        self
    }

    /// Marks the case disabled; it is reported as skipped with `reason`.
    #[must_use]
    pub fn disabled(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Some(reason.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn body(&self) -> CaseFn {
        self.body
    }

    #[must_use]
    pub const fn source(&self) -> &CaseSource {
        &self.source
    }

    /// Display name, falling back to the case name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn disabled_reason(&self) -> Option<&str> {
        self.disabled.as_deref()
    }

    /// Invocation name template: the explicit one or the source's default.
    #[must_use]
    pub fn template(&self) -> &str {
        self.name_template.as_deref().unwrap_or_else(|| self.source.default_template())
    }
}

/// Ordered, explicitly built collection of uniquely named cases.
#[derive(Debug, Default)]
pub struct Suite {
    name: String,
    cases: Vec<CaseSpec>,
    names: FxHashSet<String>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Adds a case after the ones already registered.
    ///
    /// # Errors
    /// * [`HarnessError::DuplicateCase`] when the name is taken.
    /// * [`HarnessError::InvalidCase`] for an empty name.
    /// * [`HarnessError::InvalidSource`] for a zero repetition count.
    pub fn register(&mut self, case: CaseSpec) -> Result<&mut Self, HarnessError> {
        if case.name.trim().is_empty() {
            return Err(HarnessError::InvalidCase {
                message: "case name cannot be empty".into(),
                context: None,
            });
        }
        if matches!(case.source, CaseSource::Repeated(0)) {
            return Err(HarnessError::InvalidSource {
                message: "repetition count must be greater than zero".into(),
                context: Some(case.name.into()),
            });
        }
        if !self.names.insert(case.name.clone()) {
            return Err(HarnessError::DuplicateCase {
                message: format!("'{}' is already registered", case.name).into(),
                context: Some(self.name.clone().into()),
            });
        }

        tracing::debug!(suite = %self.name, case = %case.name, "Case registered");
        self.cases.push(case);
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cases(&self) -> &[CaseSpec] {
        &self.cases
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CaseSpec> {
        self.cases.iter().find(|case| case.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

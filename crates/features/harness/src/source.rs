use crate::args::{Argument, Arguments};
use crate::csv::{CsvFormat, CsvRows};
use crate::error::{HarnessError, HarnessErrorExt};
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Produces argument tuples each time a [`CaseSource::Method`] source is iterated.
pub type Provider = fn() -> Vec<Arguments>;

/// Iterator over the tuples of one source.
pub type CaseIter<'a> = Box<dyn Iterator<Item = Result<Arguments, HarnessError>> + 'a>;

/// How the named subset of a symbol source is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMode {
    /// Keep only the named members.
    Include,
    /// Keep every member except the named ones.
    Exclude,
}

/// Description of the argument tuples that drive a case.
///
/// A source is inert until iterated with [`CaseSource::cases`] (or
/// [`CaseSource::cases_in`]); every call starts again from the first tuple.
#[derive(Debug, Clone)]
pub enum CaseSource {
    /// A single invocation without arguments.
    Single,
    /// `n` invocations without arguments, each aware of its repetition.
    Repeated(u32),
    /// One single-argument tuple per value.
    Values(Vec<Argument>),
    Literal(Vec<Arguments>),
    Method(Provider),
    /// Members of a fixed symbol set in declaration order, filtered by name.
    Symbols { members: Vec<&'static str>, mode: SymbolMode, names: Vec<String> },
    /// Inline rows.
    Csv { text: String, format: CsvFormat },
    /// Rows read from a file, resolved against the resources directory.
    CsvFile { path: PathBuf, format: CsvFormat },
}

impl CaseSource {
    pub fn values<I, A>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn literal(tuples: impl IntoIterator<Item = Arguments>) -> Self {
        Self::Literal(tuples.into_iter().collect())
    }

    #[must_use]
    pub const fn method(provider: Provider) -> Self {
        Self::Method(provider)
    }

    #[must_use]
    pub const fn repeated(times: u32) -> Self {
        Self::Repeated(times)
    }

    /// Every member of `E`.
    #[must_use]
    pub fn symbols<E>() -> Self
    where
        E: IntoEnumIterator + Into<&'static str>,
    {
        Self::symbol_set(E::iter().map(Into::into), SymbolMode::Exclude, iter::empty::<String>())
    }

    /// Every member of `E` except `names`.
    pub fn symbols_excluding<E, S>(names: impl IntoIterator<Item = S>) -> Self
    where
        E: IntoEnumIterator + Into<&'static str>,
        S: Into<String>,
    {
        Self::symbol_set(E::iter().map(Into::into), SymbolMode::Exclude, names)
    }

    /// Only the members of `E` listed in `names`, in declaration order.
    pub fn symbols_including<E, S>(names: impl IntoIterator<Item = S>) -> Self
    where
        E: IntoEnumIterator + Into<&'static str>,
        S: Into<String>,
    {
        Self::symbol_set(E::iter().map(Into::into), SymbolMode::Include, names)
    }

    /// A symbol source over an explicit member list.
    pub fn symbol_set<S>(
        members: impl IntoIterator<Item = &'static str>,
        mode: SymbolMode,
        names: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self::Symbols {
            members: members.into_iter().collect(),
            mode,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Inline rows, one string per row, in the inline dialect (`'` quotes).
    pub fn csv<'a>(rows: impl IntoIterator<Item = &'a str>) -> Self {
        Self::csv_text(rows.into_iter().collect::<Vec<_>>().join("\n"), CsvFormat::inline())
    }

    pub fn csv_text(text: impl Into<String>, format: CsvFormat) -> Self {
        Self::Csv { text: text.into(), format }
    }

    /// Rows of a resource file in the file dialect (`"` quotes).
    pub fn csv_file(path: impl Into<PathBuf>) -> Self {
        Self::csv_file_with(path, CsvFormat::file())
    }

    pub fn csv_file_with(path: impl Into<PathBuf>, format: CsvFormat) -> Self {
        Self::CsvFile { path: path.into(), format }
    }

    /// Whether invocations receive arguments.
    #[must_use]
    pub const fn is_parameterized(&self) -> bool {
        !matches!(self, Self::Single | Self::Repeated(_))
    }

    /// Default display-name template for invocations of this source.
    #[must_use]
    pub const fn default_template(&self) -> &'static str {
        match self {
            Self::Single => "{displayName}",
            Self::Repeated(_) => "{displayName} {currentRepetition}/{totalRepetitions}",
            _ => "[{index}] {arguments}",
        }
    }

    /// Tuples with file paths resolved against the working directory.
    #[must_use]
    pub fn cases(&self) -> CaseIter<'_> {
        self.cases_in(Path::new(""))
    }

    /// Tuples with file paths resolved against `resources_dir`.
    ///
    /// Files are read when iteration begins. An unreadable file or an unknown symbol
    /// name yields a single error; a malformed row yields an error for that row only.
    #[must_use]
    pub fn cases_in(&self, resources_dir: &Path) -> CaseIter<'_> {
        match self {
            Self::Single => Box::new(iter::once(Ok(Arguments::empty()))),
            Self::Repeated(times) => Box::new((0..*times).map(|_| Ok(Arguments::empty()))),
            Self::Values(values) => {
                Box::new(values.iter().map(|value| Ok(Arguments::new(vec![value.clone()]))))
            },
            Self::Literal(tuples) => Box::new(tuples.iter().cloned().map(Ok)),
            Self::Method(provider) => {
                let provider = *provider;
                Box::new(iter::once_with(provider).flatten().map(Ok))
            },
            Self::Symbols { members, mode, names } => symbol_cases(members, *mode, names),
            Self::Csv { text, format } => Box::new(CsvRows::new(text.clone(), format.clone())),
            Self::CsvFile { path, format } => {
                let path = resources_dir.join(path);
                let format = format.clone();
                Box::new(
                    iter::once_with(move || {
                        fs::read_to_string(&path).context(path.display().to_string())
                    })
                    .flat_map(move |read| -> CaseIter<'static> {
                        match read {
                            Ok(text) => Box::new(CsvRows::new(text, format.clone())),
                            Err(err) => Box::new(iter::once(Err(err))),
                        }
                    }),
                )
            },
        }
    }
}

fn symbol_cases<'a>(
    members: &'a [&'static str],
    mode: SymbolMode,
    names: &'a [String],
) -> CaseIter<'a> {
    let unknown: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !members.iter().any(|member| member == name))
        .collect();
    if !unknown.is_empty() {
        return Box::new(iter::once(Err(HarnessError::UnknownSymbol {
            message: format!("{} not in [{}]", unknown.join(", "), members.join(", ")).into(),
            context: None,
        })));
    }

    Box::new(
        members
            .iter()
            .filter(move |member| {
                let named = names.iter().any(|name| name == *member);
                match mode {
                    SymbolMode::Include => named,
                    SymbolMode::Exclude => !named,
                }
            })
            .map(|member| Ok(Arguments::new(vec![Argument::Symbol((*member).to_owned())]))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use casekit_domain::TimeUnit;

    fn symbols(source: &CaseSource) -> Vec<String> {
        source.cases().map(|tuple| tuple.unwrap().get::<String>(0).unwrap()).collect()
    }

    #[test]
    fn single_and_repeated_have_no_arguments() {
        assert_eq!(CaseSource::Single.cases().count(), 1);
        let repeated: Vec<_> = CaseSource::repeated(3).cases().collect::<Result<_, _>>().unwrap();
        assert_eq!(repeated.len(), 3);
        assert!(repeated.iter().all(Arguments::is_empty));
        assert_eq!(CaseSource::repeated(0).cases().count(), 0);
    }

    #[test]
    fn values_become_single_argument_tuples() {
        let source = CaseSource::values([1, 2, 3]);
        let ints: Vec<i32> = source.cases().map(|t| t.unwrap().get(0).unwrap()).collect();
        assert_eq!(ints, [1, 2, 3]);
    }

    #[test]
    fn method_provider_is_called_on_every_iteration() {
        fn provider() -> Vec<Arguments> {
            vec![crate::args!["foo", 1], crate::args!["bar", 2]]
        }
        let source = CaseSource::method(provider);
        assert_eq!(source.cases().count(), 2);
        assert_eq!(source.cases().count(), 2);
    }

    #[test]
    fn exclusion_keeps_declaration_order() {
        let source = CaseSource::symbol_set(["A", "B", "C", "D"], SymbolMode::Exclude, ["B"]);
        assert_eq!(symbols(&source), ["A", "C", "D"]);
    }

    #[test]
    fn inclusion_keeps_declaration_order_not_name_order() {
        let source = CaseSource::symbol_set(["A", "B", "C", "D"], SymbolMode::Include, ["D", "A"]);
        assert_eq!(symbols(&source), ["A", "D"]);
    }

    #[test]
    fn enum_symbols_use_canonical_names() {
        let source = CaseSource::symbols_excluding::<TimeUnit, _>(["DAYS", "HOURS"]);
        assert_eq!(
            symbols(&source),
            ["NANOSECONDS", "MICROSECONDS", "MILLISECONDS", "SECONDS", "MINUTES"]
        );
        assert_eq!(CaseSource::symbols::<TimeUnit>().cases().count(), 7);
    }

    #[test]
    fn unknown_symbol_fails_before_any_case() {
        let source = CaseSource::symbol_set(["A", "B"], SymbolMode::Exclude, ["Z"]);
        let tuples: Vec<_> = source.cases().collect();
        assert_eq!(tuples.len(), 1);
        assert!(matches!(tuples[0], Err(HarnessError::UnknownSymbol { .. })));
    }

    #[test]
    fn missing_file_yields_one_io_error() {
        let source = CaseSource::csv_file("definitely-missing.csv");
        let tuples: Vec<_> = source.cases_in(Path::new("/nonexistent")).collect();
        assert_eq!(tuples.len(), 1);
        let err = tuples.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err.kind(), "Io");
        assert!(err.to_string().contains("definitely-missing.csv"));
    }

    #[test]
    fn default_templates_follow_source_shape() {
        assert_eq!(CaseSource::Single.default_template(), "{displayName}");
        assert!(CaseSource::repeated(2).default_template().contains("{currentRepetition}"));
        assert_eq!(CaseSource::values([1]).default_template(), "[{index}] {arguments}");
        assert!(!CaseSource::repeated(2).is_parameterized());
        assert!(CaseSource::csv(["a"]).is_parameterized());
    }
}

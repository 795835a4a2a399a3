use std::borrow::Cow;

/// Errors raised while building, iterating or executing cases.
#[casekit_derive::casekit_error]
pub enum HarnessError {
    /// A file-backed case source could not be read.
    #[error("Case source IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A tabular row could not be parsed.
    #[error("CSV error at line {line}{}: {message}", format_context(.context))]
    Csv { line: usize, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A symbol source names a symbol that is not a member of its set.
    #[error("Unknown symbol{}: {message}", format_context(.context))]
    UnknownSymbol { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A positional argument is missing or cannot be converted to the requested type.
    #[error("Argument error{}: {message}", format_context(.context))]
    Argument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A case definition is unusable (e.g., an empty name).
    #[error("Invalid case{}: {message}", format_context(.context))]
    InvalidCase { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A case with the same name is already registered.
    #[error("Duplicate case{}: {message}", format_context(.context))]
    DuplicateCase { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A case source is structurally unusable (e.g., zero repetitions).
    #[error("Invalid case source{}: {message}", format_context(.context))]
    InvalidSource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

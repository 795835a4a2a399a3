use std::borrow::Cow;

/// Failures raised by the arithmetic utilities.
#[casekit_derive::casekit_error]
#[derive(PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor was zero. Carries nothing beyond its kind.
    #[error("attempt to divide by zero")]
    DivisionByZero,

    /// An argument was absent or otherwise unusable.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

//! # Arithmetic
//!
//! Two stateless utilities: truncating integer division and string length.
//! Both are pure and safe to call from any thread.
//!
//! ```rust
//! use casekit_arithmetic::{ArithmeticError, divide, length};
//!
//! assert_eq!(divide(11, 4), Ok(2));
//! assert_eq!(divide(1, 0), Err(ArithmeticError::DivisionByZero));
//! assert_eq!(length("foo"), 3);
//! ```

mod error;

pub use crate::error::{ArithmeticError, ArithmeticErrorExt};

/// Integer quotient of `a / b`, truncated toward zero.
///
/// `divide(i32::MIN, -1)` wraps to `i32::MIN` (two's-complement overflow) instead
/// of failing.
///
/// # Errors
/// Returns [`ArithmeticError::DivisionByZero`] when `b == 0`.
pub const fn divide(a: i32, b: i32) -> Result<i32, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// Number of UTF-16 code units in `s`.
///
/// Characters outside the Basic Multilingual Plane count as two.
#[must_use]
pub fn length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// [`length`] for a value that may be absent.
///
/// # Errors
/// Returns [`ArithmeticError::InvalidArgument`] when `s` is `None`.
pub fn try_length(s: Option<&str>) -> Result<usize, ArithmeticError> {
    s.map(length).ok_or_else(|| ArithmeticError::InvalidArgument {
        message: "string is absent".into(),
        context: Some("length".into()),
    })
}

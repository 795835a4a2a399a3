//! Positional case arguments and their typed conversion.

use crate::error::HarnessError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One positional argument as produced by a case source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    /// An absent value (e.g., an unquoted empty CSV field).
    Null,
    Text(String),
    Int(i64),
    /// A member name of a symbol set.
    Symbol(String),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(s) | Self::Symbol(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! int_argument {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Argument {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        }
    )*};
}

int_argument!(i8, i16, i32, i64, u8, u16, u32);

/// An ordered tuple of arguments for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    #[must_use]
    pub const fn new(values: Vec<Argument>) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Argument] {
        &self.0
    }

    /// The raw argument at `index`, if present.
    #[must_use]
    pub fn raw(&self, index: usize) -> Option<&Argument> {
        self.0.get(index)
    }

    /// Converts the argument at `index` into `T`.
    ///
    /// # Errors
    /// Returns [`HarnessError::Argument`] when the index is out of range or the value
    /// cannot be represented as `T`.
    pub fn get<T: FromArgument>(&self, index: usize) -> Result<T, HarnessError> {
        let arg = self.lookup(index)?;
        T::from_argument(arg).map_err(|message| HarnessError::Argument {
            message: format!("argument {index} ({arg}): {message}").into(),
            context: Some(std::any::type_name::<T>().into()),
        })
    }

    /// Parses the argument at `index` as a symbol of `E` (for example a `strum` enum).
    ///
    /// # Errors
    /// Returns [`HarnessError::Argument`] when the index is out of range, the value is
    /// null, or `E` rejects the name.
    pub fn symbol<E: FromStr>(&self, index: usize) -> Result<E, HarnessError> {
        let name: String = self.get(index)?;
        name.parse::<E>().map_err(|_| HarnessError::Argument {
            message: format!("argument {index}: '{name}' is not a member").into(),
            context: Some(std::any::type_name::<E>().into()),
        })
    }

    fn lookup(&self, index: usize) -> Result<&Argument, HarnessError> {
        self.0.get(index).ok_or_else(|| HarnessError::Argument {
            message: format!("no argument at index {index}, {} supplied", self.0.len()).into(),
            context: None,
        })
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(values: Vec<Argument>) -> Self {
        Self(values)
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds [`Arguments`] from heterogeneous literals.
///
/// ```rust
/// use casekit_harness::{Argument, args};
///
/// let tuple = args!["foo", 1, None::<&str>];
/// assert_eq!(tuple.raw(0), Some(&Argument::Text("foo".to_owned())));
/// assert_eq!(tuple.raw(1), Some(&Argument::Int(1)));
/// assert_eq!(tuple.raw(2), Some(&Argument::Null));
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::Arguments::empty() };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::new(vec![$($crate::Argument::from($value)),+])
    };
}

/// Conversion from a positional [`Argument`] into a parameter type.
pub trait FromArgument: Sized {
    /// # Errors
    /// Returns a short reason when the argument cannot be represented as `Self`.
    fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>>;
}

impl FromArgument for Argument {
    fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>> {
        Ok(arg.clone())
    }
}

impl FromArgument for String {
    fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>> {
        match arg {
            Argument::Null => Err("null where a value is required".into()),
            Argument::Text(s) | Argument::Symbol(s) => Ok(s.clone()),
            Argument::Int(n) => Ok(n.to_string()),
        }
    }
}

impl<T: FromArgument> FromArgument for Option<T> {
    fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>> {
        match arg {
            Argument::Null => Ok(None),
            other => T::from_argument(other).map(Some),
        }
    }
}

impl FromArgument for bool {
    fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>> {
        match arg {
            Argument::Text(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Argument::Text(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            _ => Err("expected true or false".into()),
        }
    }
}

macro_rules! int_from_argument {
    ($($ty:ty),*) => {$(
        impl FromArgument for $ty {
            fn from_argument(arg: &Argument) -> Result<Self, Cow<'static, str>> {
                match arg {
                    Argument::Int(n) => <$ty>::try_from(*n).map_err(|e| e.to_string().into()),
                    Argument::Text(s) => s.trim().parse::<$ty>().map_err(|e| e.to_string().into()),
                    Argument::Null => Err("null where a number is required".into()),
                    Argument::Symbol(_) => Err("symbol where a number is required".into()),
                }
            }
        }
    )*};
}

int_from_argument!(i32, i64, u32, u64, usize);

#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the casekit workspace.
//!
//! Only one attribute lives here today: [`macro@casekit_error`], which every error enum in
//! the workspace is declared with.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! casekit-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already derived.
/// * **Kind**: a `kind(&self) -> &'static str` accessor returning the variant name, used
///   when an error has to be recorded rather than displayed.
/// * **Context**: a companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every variant with a `source` field.
/// * **Conversions**: `From<Source>` for variants with a source field, and
///   `From<&'static str>` / `From<String>` when an `Internal` variant exists.
///
/// # Requirements
///
/// 1. Must be applied to an **enum**.
/// 2. Variants are either unit variants (a bare kind, no data) or have named fields.
///    Tuple variants are rejected.
/// 3. A `context` field must have type `Option<Cow<'static, str>>`.
/// 4. A variant with a `source` field (or `#[source]`/`#[from]`) must also have `context`.
///
/// # Example
///
/// ```rust,ignore
/// use casekit_derive::casekit_error;
/// use std::borrow::Cow;
///
/// #[casekit_error]
/// pub enum ParseError {
///     #[error("input is empty")]
///     Empty,
///
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ParseError> {
///     let text = std::fs::read_to_string(path).context("Reading input")?;
///     if text.is_empty() {
///         return Err(ParseError::Empty);
///     }
///     Ok(text)
/// }
///
/// assert_eq!(ParseError::Empty.kind(), "Empty");
/// ```
#[proc_macro_attribute]
pub fn casekit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

//! Minimal tabular reader for inline and file-backed case sources.
//!
//! One physical line is one row. Fields are trimmed unless quoted, an unquoted
//! empty field is [`Argument::Null`] and a quoted empty field is an empty
//! [`Argument::Text`].

use crate::args::{Argument, Arguments};
use crate::error::HarnessError;
use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

const DEFAULT_DELIMITER: char = ',';
const DEFAULT_COMMENT: char = '#';

/// Dialect of a tabular source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFormat {
    pub delimiter: char,
    pub quote: char,
    pub comment: Option<char>,
    /// Leading physical lines to drop (e.g., a header row).
    pub skip_lines: usize,
    /// Unquoted texts read as [`Argument::Null`].
    pub null_values: Vec<String>,
}

impl CsvFormat {
    /// Dialect for rows written inline in code: `'` quotes.
    #[must_use]
    pub const fn inline() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: '\'',
            comment: Some(DEFAULT_COMMENT),
            skip_lines: 0,
            null_values: Vec::new(),
        }
    }

    /// Dialect for resource files: `"` quotes.
    #[must_use]
    pub const fn file() -> Self {
        Self::inline().quote('"')
    }

    #[must_use]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub const fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub const fn comment(mut self, comment: Option<char>) -> Self {
        self.comment = comment;
        self
    }

    #[must_use]
    pub const fn skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    #[must_use]
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self::inline()
    }
}

/// Splits one row into arguments.
///
/// # Errors
/// Returns a short reason for an unterminated quote or text after a closing quote.
pub fn parse_line(line: &str, format: &CsvFormat) -> Result<Vec<Argument>, Cow<'static, str>> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();

    loop {
        skip_blanks(&mut chars, format.delimiter);
        let field = if chars.peek() == Some(&format.quote) {
            chars.next();
            let text = read_quoted(&mut chars, format.quote)?;
            skip_blanks(&mut chars, format.delimiter);
            match chars.peek() {
                None => {},
                Some(&c) if c == format.delimiter => {},
                Some(&c) => {
                    return Err(format!("unexpected '{c}' after closing quote").into());
                },
            }
            Argument::Text(text)
        } else {
            unquoted(&read_unquoted(&mut chars, format.delimiter), format)
        };
        fields.push(field);

        match chars.next() {
            Some(c) if c == format.delimiter => {},
            _ => return Ok(fields),
        }
    }
}

fn skip_blanks(chars: &mut Peekable<Chars<'_>>, delimiter: char) {
    while chars.next_if(|c| c.is_whitespace() && *c != delimiter).is_some() {}
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, Cow<'static, str>> {
    let mut text = String::new();
    while let Some(c) = chars.next() {
        if c != quote {
            text.push(c);
        } else if chars.next_if_eq(&quote).is_some() {
            text.push(quote);
        } else {
            return Ok(text);
        }
    }
    Err("unterminated quoted field".into())
}

fn read_unquoted(chars: &mut Peekable<Chars<'_>>, delimiter: char) -> String {
    let mut text = String::new();
    while let Some(c) = chars.next_if(|c| *c != delimiter) {
        text.push(c);
    }
    text
}

fn unquoted(raw: &str, format: &CsvFormat) -> Argument {
    let text = raw.trim();
    if text.is_empty() || format.null_values.iter().any(|null| null == text) {
        Argument::Null
    } else {
        Argument::Text(text.to_owned())
    }
}

/// Lazy row iterator over an owned block of text.
///
/// Blank lines, comment lines and the first `skip_lines` physical lines are skipped.
/// A malformed row yields an error and iteration continues with the next line.
#[derive(Debug, Clone)]
pub struct CsvRows {
    text: String,
    offset: usize,
    line_no: usize,
    format: CsvFormat,
}

impl CsvRows {
    pub fn new(text: impl Into<String>, format: CsvFormat) -> Self {
        Self { text: text.into(), offset: 0, line_no: 0, format }
    }
}

impl Iterator for CsvRows {
    type Item = Result<Arguments, HarnessError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.text.len() {
            let start = self.offset;
            let end = self.text[start..].find('\n').map_or(self.text.len(), |pos| start + pos);
            self.offset = end + 1;
            self.line_no += 1;

            let line = self.text[start..end].trim_end_matches('\r');
            if self.line_no <= self.format.skip_lines || line.trim().is_empty() {
                continue;
            }
            if self.format.comment.is_some_and(|c| line.trim_start().starts_with(c)) {
                continue;
            }

            let line_no = self.line_no;
            return Some(parse_line(line, &self.format).map(Arguments::new).map_err(|message| {
                HarnessError::Csv { line: line_no, message, context: None }
            }));
        }
        None
    }
}

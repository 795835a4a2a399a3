use crate::args::Arguments;
use crate::suite::Repetition;
use std::fmt::Write;

/// Renders an invocation display name.
///
/// Placeholders: `{displayName}`, `{index}`, `{arguments}`, `{currentRepetition}`,
/// `{totalRepetitions}` and positional `{0}`, `{1}`, … A doubled `''` renders as a
/// single `'`. Unknown placeholders are kept verbatim.
///
/// ```rust
/// use casekit_harness::{args, render_name};
///
/// let name = render_name("[{index}] {0} has {1} letters", "words", 2, &args!["bar", 3], None);
/// assert_eq!(name, "[2] bar has 3 letters");
/// ```
#[must_use]
pub fn render_name(
    template: &str,
    display_name: &str,
    index: usize,
    args: &Arguments,
    repetition: Option<Repetition>,
) -> String {
    let mut out = String::with_capacity(template.len() + display_name.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '\'']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('\'') {
            out.push('\'');
            rest = rest.strip_prefix("''").unwrap_or(&rest[1..]);
            continue;
        }

        let Some(end) = rest.find('}') else { break };
        let key = &rest[1..end];
        match key {
            "displayName" => out.push_str(display_name),
            "index" => {
                let _ = write!(out, "{index}");
            },
            "arguments" => {
                let _ = write!(out, "{args}");
            },
            "currentRepetition" | "totalRepetitions" if repetition.is_some() => {
                if let Some(rep) = repetition {
                    let value = if key == "currentRepetition" { rep.current } else { rep.total };
                    let _ = write!(out, "{value}");
                }
            },
            _ => match key.parse::<usize>().ok().and_then(|i| args.raw(i)) {
                Some(arg) => {
                    let _ = write!(out, "{arg}");
                },
                None => out.push_str(&rest[..=end]),
            },
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn default_parameterized_template() {
        let name = render_name("[{index}] {arguments}", "csv", 4, &args!["fb", None::<&str>], None);
        assert_eq!(name, "[4] fb, null");
    }

    #[test]
    fn repetition_placeholders() {
        let rep = Some(Repetition { current: 1, total: 2 });
        let name = render_name("Repeat test {currentRepetition}/{totalRepetitions}", "r", 1, &args![], rep);
        assert_eq!(name, "Repeat test 1/2");
    }

    #[test]
    fn doubled_quote_and_unknown_placeholders() {
        let name = render_name("it''s {nope} {9} {displayName}", "x", 1, &args![], None);
        assert_eq!(name, "it's {nope} {9} x");
    }

    #[test]
    fn repetition_placeholders_without_repetition_stay_verbatim() {
        let name = render_name("{currentRepetition}", "x", 1, &args![], None);
        assert_eq!(name, "{currentRepetition}");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        assert_eq!(render_name("open {index", "x", 1, &args![], None), "open {index");
    }
}

//! Positional placeholder substitution.
//!
//! Grammar:
//! - `{N}` inserts argument `N` (zero-based).
//! - `{N:Dk}` inserts integer argument `N` zero-padded to at least `k` digits.
//! - `{{` and `}}` produce literal braces.

use std::fmt;

use thiserror::Error;

/// A positional template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        Self::Unsigned(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Why a template could not be formatted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unclosed placeholder starting at byte {0}")]
    UnclosedPlaceholder(usize),

    #[error("unexpected '}}' at byte {0}")]
    UnexpectedClosingBrace(usize),

    #[error("invalid placeholder index '{0}'")]
    InvalidIndex(String),

    #[error("placeholder {{{index}}} has no argument ({provided} provided)")]
    MissingArgument { index: usize, provided: usize },

    #[error("invalid format specifier '{0}'")]
    InvalidFormatSpec(String),

    #[error("placeholder {{{0}}} requires an integer argument")]
    NotAnInteger(usize),
}

/// Substitutes `args` into `template`.
///
/// # Errors
/// Returns [`FormatError`] for malformed placeholders, an index past the end
/// of `args`, or a `D` specifier applied to a non-integer argument.
pub fn format_template(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => output.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => output.push('}'),
            '{' => {
                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, inner)) => placeholder.push(inner),
                        None => return Err(FormatError::UnclosedPlaceholder(position)),
                    }
                }
                render_placeholder(&placeholder, args, &mut output)?;
            }
            '}' => return Err(FormatError::UnexpectedClosingBrace(position)),
            _ => output.push(c),
        }
    }

    Ok(output)
}

/// Renders the body of one `{...}` placeholder into `output`.
fn render_placeholder(
    placeholder: &str,
    args: &[FormatArg],
    output: &mut String,
) -> Result<(), FormatError> {
    let (index_text, spec) = match placeholder.split_once(':') {
        Some((index, spec)) => (index, Some(spec)),
        None => (placeholder, None),
    };

    let index: usize = index_text
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidIndex(index_text.to_string()))?;
    let arg = args
        .get(index)
        .ok_or(FormatError::MissingArgument { index, provided: args.len() })?;

    match spec {
        None => output.push_str(&arg.to_string()),
        Some(spec) => {
            let width = parse_digit_spec(spec)?;
            let padded = match arg {
                FormatArg::Integer(value) if *value < 0 => {
                    format!("-{:0width$}", value.unsigned_abs())
                }
                FormatArg::Integer(value) => format!("{value:0width$}"),
                FormatArg::Unsigned(value) => format!("{value:0width$}"),
                FormatArg::Text(_) | FormatArg::Float(_) | FormatArg::Bool(_) => {
                    return Err(FormatError::NotAnInteger(index));
                }
            };
            output.push_str(&padded);
        }
    }

    Ok(())
}

/// Parses a `D`/`Dk` specifier into its minimum digit count.
fn parse_digit_spec(spec: &str) -> Result<usize, FormatError> {
    let invalid = || FormatError::InvalidFormatSpec(spec.to_string());

    let digits = spec.strip_prefix(['D', 'd']).ok_or_else(invalid)?;
    if digits.is_empty() {
        return Ok(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // `core::fmt` widths are `u16`.
    digits.parse::<u16>().map(usize::from).map_err(|_| invalid())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Error: {0}", vec!["disk full".into()], "Error: disk full")]
    #[case("{0} of {1} players online", vec![3.into(), 10.into()], "3 of 10 players online")]
    #[case("{1} before {0}", vec!["a".into(), "b".into()], "b before a")]
    #[case("{0} and {0}", vec!["x".into()], "x and x")]
    #[case("no placeholders", vec![], "no placeholders")]
    #[case("unused args", vec!["x".into()], "unused args")]
    #[case("{{literal}} {0}", vec!["x".into()], "{literal} x")]
    #[case("Uptime {0:D2}:{1:D2}", vec![5.into(), 7.into()], "Uptime 05:07")]
    #[case("{0:D3}", vec![(-5).into()], "-005")]
    #[case("{0:D2}", vec![1234_u64.into()], "1234")]
    #[case("{0:D}", vec![42.into()], "42")]
    #[case("{0}", vec![true.into()], "true")]
    #[case("{0}", vec![1.5.into()], "1.5")]
    #[case("{ 0 }", vec!["x".into()], "x")]
    #[case("héllo {0}", vec!["wörld".into()], "héllo wörld")]
    fn format_template_substitutes(
        #[case] template: &str,
        #[case] args: Vec<FormatArg>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_template(template, &args), Ok(expected.to_string()));
    }

    #[rstest]
    #[case("Error: {0", vec!["x".into()], FormatError::UnclosedPlaceholder(7))]
    #[case("oops }", vec![], FormatError::UnexpectedClosingBrace(5))]
    #[case("{name}", vec!["x".into()], FormatError::InvalidIndex("name".to_string()))]
    #[case("{}", vec!["x".into()], FormatError::InvalidIndex(String::new()))]
    #[case("{1}", vec!["x".into()], FormatError::MissingArgument { index: 1, provided: 1 })]
    #[case("{0}", vec![], FormatError::MissingArgument { index: 0, provided: 0 })]
    #[case("{0:X2}", vec![1.into()], FormatError::InvalidFormatSpec("X2".to_string()))]
    #[case("{0:D2x}", vec![1.into()], FormatError::InvalidFormatSpec("D2x".to_string()))]
    #[case("{0:D2}", vec!["x".into()], FormatError::NotAnInteger(0))]
    #[case("{0:D70000}", vec![1.into()], FormatError::InvalidFormatSpec("D70000".to_string()))]
    #[case("{0:D1000000000000}", vec![1.into()], FormatError::InvalidFormatSpec("D1000000000000".to_string()))]
    #[case("{0:D99999999999999999999999}", vec![1.into()], FormatError::InvalidFormatSpec("D99999999999999999999999".to_string()))]
    fn format_template_reports_errors(
        #[case] template: &str,
        #[case] args: Vec<FormatArg>,
        #[case] expected: FormatError,
    ) {
        assert_eq!(format_template(template, &args), Err(expected));
    }

    #[googletest::test]
    fn widest_digit_spec_still_formats() {
        let formatted = format_template("{0:D65535}", &[FormatArg::Integer(1)]).unwrap();

        expect_that!(formatted.len(), eq(65535));
        expect_that!(formatted, ends_with("01"));
    }

    #[googletest::test]
    fn from_impls_pick_matching_variant() {
        expect_that!(FormatArg::from("a"), eq(&FormatArg::Text("a".to_string())));
        expect_that!(FormatArg::from(String::from("b")), eq(&FormatArg::Text("b".to_string())));
        expect_that!(FormatArg::from(-1_i32), eq(&FormatArg::Integer(-1)));
        expect_that!(FormatArg::from(7_usize), eq(&FormatArg::Unsigned(7)));
        expect_that!(FormatArg::from(false), eq(&FormatArg::Bool(false)));
    }
}

//! Tokenizer for comma-separated setting values.
//!
//! Follows identifier-list rules: elements are separated by commas, may be
//! surrounded by whitespace, and may be double-quoted to embed commas or
//! whitespace. Inside quotes a doubled `""` stands for one quote character.

use std::borrow::Cow;

use crate::error::{SyntaxFault, ValidationError};

const SEPARATOR: char = ',';
const QUOTE: char = '"';

fn is_list_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Splits a list value into its elements.
///
/// Elements borrow from `raw` unless they contain an escaped quote.
pub(crate) fn split_list(raw: &str) -> Result<Vec<Cow<'_, str>>, ValidationError> {
    let mut rest = raw.trim_start_matches(is_list_space);
    if rest.is_empty() {
        return Err(ValidationError::list_syntax(SyntaxFault::EmptyInput));
    }

    let mut elements = Vec::new();
    loop {
        let (element, after) = match rest.strip_prefix(QUOTE) {
            Some(quoted) => take_quoted(quoted)?,
            None => take_unquoted(rest)?,
        };
        elements
            .try_reserve(1)
            .map_err(|_| ValidationError::ResourceExhausted)?;
        elements.push(element);

        rest = after.trim_start_matches(is_list_space);
        match rest.strip_prefix(SEPARATOR) {
            Some(next) => rest = next.trim_start_matches(is_list_space),
            None if rest.is_empty() => return Ok(elements),
            None => return Err(ValidationError::list_syntax(SyntaxFault::MissingSeparator)),
        }
    }
}

/// Takes an unquoted element, which ends at a separator or whitespace.
fn take_unquoted(input: &str) -> Result<(Cow<'_, str>, &str), ValidationError> {
    let end = input
        .find(|c: char| c == SEPARATOR || is_list_space(c))
        .unwrap_or(input.len());
    if end == 0 {
        return Err(ValidationError::list_syntax(SyntaxFault::EmptyName));
    }
    Ok((Cow::Borrowed(&input[..end]), &input[end..]))
}

/// Takes a quoted element; `input` starts just past the opening quote.
fn take_quoted(input: &str) -> Result<(Cow<'_, str>, &str), ValidationError> {
    let mut unescaped: Option<String> = None;
    let mut start = 0;

    loop {
        let close = input[start..]
            .find(QUOTE)
            .map(|offset| start + offset)
            .ok_or(ValidationError::list_syntax(SyntaxFault::UnterminatedQuote))?;
        let after = &input[close + QUOTE.len_utf8()..];

        if after.starts_with(QUOTE) {
            // Doubled quote: keep one and keep scanning
            let buf = unescaped.get_or_insert_with(String::new);
            push_fallible(buf, &input[start..=close])?;
            start = close + 2 * QUOTE.len_utf8();
            continue;
        }

        let element = match unescaped {
            Some(mut buf) => {
                push_fallible(&mut buf, &input[start..close])?;
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(&input[..close]),
        };
        if element.is_empty() {
            return Err(ValidationError::list_syntax(SyntaxFault::EmptyName));
        }
        return Ok((element, after));
    }
}

fn push_fallible(buf: &mut String, s: &str) -> Result<(), ValidationError> {
    buf.try_reserve(s.len())
        .map_err(|_| ValidationError::ResourceExhausted)?;
    buf.push_str(s);
    Ok(())
}

//! Line unfolding and content-line tokenization.
//!
//! Folding follows the interchange convention: a line break followed by a
//! single space or tab continues the previous line.

use super::values::strip_enclosing_quotes;

/// Unfolds input text by removing line continuations.
///
/// A break sequence (`\r\n`, `\r`, or `\n`) immediately followed by exactly
/// one space or tab is a continuation: the break and that one whitespace
/// character are removed. Everything else passes through verbatim.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                let crlf = chars.peek() == Some(&'\n');
                if crlf {
                    chars.next();
                }
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\r');
                    if crlf {
                        result.push('\n');
                    }
                }
            }
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Splits unfolded text into logical lines.
///
/// A break sequence immediately followed by a non-whitespace character ends
/// the current line. Breaks followed by whitespace (or by end of input) are
/// not split points and stay embedded in the current line. Empty fragments
/// are never produced.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' || c == '\n' {
            let crlf = c == '\r' && chars.peek() == Some(&'\n');
            if crlf {
                chars.next();
            }
            match chars.peek() {
                Some(&next) if !next.is_whitespace() => {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                }
                _ => {
                    current.push(c);
                    if crlf {
                        current.push('\n');
                    }
                }
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// A `name=value` modifier attached to a content line.
///
/// Names are lower-cased; values have one enclosing quote pair removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: String,
}

/// A tokenized logical line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Field name, upper-cased for registry lookup.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Raw value with interior colons preserved.
    pub value: String,
}

/// Tokenizes one logical line into field name, parameters, and raw value.
///
/// Format: `NAME[;PARAM=VALUE...]:VALUE`. The split happens at the first
/// colon; a line without one yields the whole line as the field name and an
/// empty value. Parameters are only recognized when the head contains a
/// semicolon.
#[must_use]
pub fn tokenize(line: &str) -> ContentLine {
    let line = strip_item_prefix(line);

    let Some((head, value)) = line.split_once(':') else {
        return ContentLine {
            name: line.to_ascii_uppercase(),
            params: Vec::new(),
            value: String::new(),
        };
    };

    let (name, params) = if head.contains(';') {
        let mut segments = head.split(';');
        let name = segments.next().unwrap_or_default();
        (name, segments.map(parse_parameter).collect())
    } else {
        (head, Vec::new())
    };

    ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    }
}

/// Strips the vendor `item<digits>.` noise prefix when the full pattern
/// matches; otherwise the line passes through untouched.
fn strip_item_prefix(line: &str) -> &str {
    let Some(rest) = line.strip_prefix("item") else {
        return line;
    };

    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }

    match rest[digits..].strip_prefix('.') {
        Some(stripped) => stripped,
        None => line,
    }
}

/// Splits one parameter segment on the first `=`.
///
/// A segment without `=` keeps an empty value (bare markers like `PREF`).
fn parse_parameter(segment: &str) -> Parameter {
    let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
    Parameter {
        name: name.to_ascii_lowercase(),
        value: strip_enclosing_quotes(value),
    }
}

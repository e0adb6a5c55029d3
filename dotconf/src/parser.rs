//! Dotenv line parsing
//!
//! Each line is handled on its own; nothing carries over between lines.
//!
//! ```text
//! # full-line comment
//! export DATABASE_URL=postgres://localhost/db   # trailing comment
//! GREETING="hello # not a comment\nsecond line"
//! timeout: 30
//! ```

use crate::error::LineError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, BufRead};

/// Result of parsing a whole source, with bookkeeping for logs.
#[derive(Debug, Default)]
pub(crate) struct ParsedSource {
    pub values: HashMap<String, String>,
    pub skipped: usize,
}

/// Parse dotenv text into a key/value map.
///
/// Malformed lines are skipped. Later definitions of a key overwrite earlier ones.
pub fn parse_str(text: &str) -> HashMap<String, String> {
    // `str::lines` never yields an error
    parse_lines(text.lines().map(|line| Ok(line.to_string())))
        .map(|parsed| parsed.values)
        .unwrap_or_default()
}

/// Parse dotenv text from a buffered reader into a key/value map.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails, including on invalid UTF-8.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<HashMap<String, String>> {
    parse_lines(reader.lines()).map(|parsed| parsed.values)
}

pub(crate) fn parse_lines<I>(lines: I) -> io::Result<ParsedSource>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut parsed = ParsedSource::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match parse_line(&line) {
            Ok(Some((key, value))) => {
                if parsed.values.insert(key.clone(), value).is_some() {
                    tracing::warn!(line = line_number, key = %key, "Dotenv key redefined, keeping the later value");
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::trace!(line = line_number, error = %e, "Skipping malformed dotenv line");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

/// Whether a line carries no entry: blank, or a `#` comment.
pub fn is_ignored_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a single line into a `(key, value)` pair.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// [`LineError::MissingSeparator`] if the line has neither `=` nor `:`.
pub fn parse_line(line: &str) -> Result<Option<(String, String)>, LineError> {
    if is_ignored_line(line) {
        return Ok(None);
    }

    let line = strip_comment(line);

    // YAML-style `key: value` is accepted when there is no `=`
    let (key, value) = line
        .split_once('=')
        .or_else(|| line.split_once(':'))
        .ok_or(LineError::MissingSeparator)?;

    let key = key.strip_prefix("export").unwrap_or(key).trim_matches(' ');
    let value = unquote(value.trim_matches(' '));

    Ok(Some((key.to_string(), value.into_owned())))
}

/// Drop a trailing `#` comment while keeping hashes inside quotes.
///
/// The line is cut into `#`-separated segments. A segment holding exactly one
/// `"` or exactly one `'` opens or closes a quoted region. The first segment,
/// segments inside an open region, and the segment closing it are kept.
/// Note that a segment with three quotes does not toggle.
fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains('#') {
        return Cow::Borrowed(line);
    }

    let mut quote_open = false;
    let mut kept: Vec<&str> = Vec::new();

    for segment in line.split('#') {
        if toggles_quote(segment) {
            if quote_open {
                quote_open = false;
                kept.push(segment);
            } else {
                quote_open = true;
            }
        }

        if kept.is_empty() || quote_open {
            kept.push(segment);
        }
    }

    Cow::Owned(kept.join("#"))
}

fn toggles_quote(segment: &str) -> bool {
    segment.matches('"').count() == 1 || segment.matches('\'').count() == 1
}

/// Strip one pair of enclosing quotes and expand `\"` and `\n`.
///
/// Values without exactly two quotes of one kind, raw or unescaped, are returned untouched.
fn unquote(value: &str) -> Cow<'_, str> {
    let Some(quote) = enclosing_quote(value) else {
        return Cow::Borrowed(value);
    };

    let inner = value.strip_prefix(quote).unwrap_or(value);
    let inner = inner.strip_suffix(quote).unwrap_or(inner);

    Cow::Owned(inner.replace("\\\"", "\"").replace("\\n", "\n"))
}

fn enclosing_quote(value: &str) -> Option<char> {
    let double = holds_quote_pair(value, '"');
    let single = holds_quote_pair(value, '\'');

    match value.chars().next() {
        Some('\'') if single => Some('\''),
        _ if double => Some('"'),
        _ if single => Some('\''),
        _ => None,
    }
}

// Either count qualifies: `"a\"b"` pairs on unescaped quotes, `"C:\dir\"` on raw ones.
fn holds_quote_pair(value: &str, quote: char) -> bool {
    value.matches(quote).count() == 2 || count_unescaped(value, quote) == 2
}

fn count_unescaped(value: &str, quote: char) -> usize {
    let mut previous = None;
    let mut count = 0;
    for c in value.chars() {
        if c == quote && previous != Some('\\') {
            count += 1;
        }
        previous = Some(c);
    }
    count
}

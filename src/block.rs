//! Parameter block parsing
//!
//! Turns the whitespace-aligned `parameters` text returned by the model server
//! into an ordered list of key/value rows:
//!
//! ```text
//! num_ctx        4096
//! stop           "<|start_header_id|>"
//! stop           "<|end_header_id|>"
//! temperature    0.8
//! ```
//!
//! Values stay strings here. Typing happens in [`crate::validate`].

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::error::parse::malformed_line;

/// A single `key value` line of a parameter block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPair {
    pub key: String,
    pub value: String,
}

impl RawPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered rows of a parameter block. Repeated keys are kept as separate rows.
pub type ParsedBlock = Vec<RawPair>;

/// What to do with a non-blank line that has no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Drop the line, remember the error, keep parsing
    #[default]
    Skip,
    /// Stop at the first malformed line
    Abort,
}

/// Result of a skip-and-continue parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientParse {
    pub pairs: ParsedBlock,
    pub skipped: Vec<ParseError>,
}

/// Parse a parameter block, failing on the first malformed line.
pub fn parse(text: &str) -> Result<ParsedBlock, ParseError> {
    split_lines(text)
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

/// Parse a parameter block, skipping malformed lines.
///
/// Every skipped line is reported in [`LenientParse::skipped`] in the order it
/// was encountered.
pub fn parse_lenient(text: &str) -> LenientParse {
    let mut result = LenientParse::default();

    for (idx, line) in split_lines(text).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(idx + 1, line) {
            Ok(pair) => result.pairs.push(pair),
            Err(err) => result.skipped.push(err),
        }
    }

    result
}

/// Parse a parameter block with an explicit malformed-line policy.
pub fn parse_with(text: &str, policy: MalformedLinePolicy) -> Result<LenientParse, ParseError> {
    match policy {
        MalformedLinePolicy::Skip => Ok(parse_lenient(text)),
        MalformedLinePolicy::Abort => parse(text).map(|pairs| LenientParse {
            pairs,
            skipped: Vec::new(),
        }),
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<RawPair, ParseError> {
    let trimmed = line.trim_start();
    let Some(split_at) = trimmed.find(char::is_whitespace) else {
        return Err(malformed_line(line_number, line));
    };

    let (key, rest) = trimmed.split_at(split_at);
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(malformed_line(line_number, line));
    }

    Ok(RawPair::new(key, strip_quotes(rest)))
}

/// Strip one pair of surrounding double quotes, if both are present.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(pos) => {
                let skip = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + skip..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

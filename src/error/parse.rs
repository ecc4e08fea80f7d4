//! Parameter block parsing errors

use super::ParseError;

/// Creates a malformed line error
pub fn malformed_line(line_number: usize, raw_line: impl Into<String>) -> ParseError {
    ParseError::MalformedLine {
        line_number,
        raw_line: raw_line.into(),
    }
}

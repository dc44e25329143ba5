//! Parser: turns the raw response body into [`Record`] values.
//!
//! The body must be a JSON array of objects carrying integer `id` and
//! `listId` keys and an optional string `name`. Extra keys are ignored.
//! Nothing is coerced: a quoted number or a fractional `listId` is an error.

use crate::types::Record;
use thiserror::Error;

/// Why a payload could not be turned into records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not JSON at all (syntax error or truncated input).
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
    /// Valid JSON, but not an array of `{id, listId, name}` objects.
    #[error("unexpected payload shape at line {line}, column {column}: {message}")]
    Shape {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let (line, column) = (err.line(), err.column());
        let message = err.to_string();
        match err.classify() {
            Category::Data => ParseError::Shape { line, column, message },
            Category::Syntax | Category::Eof | Category::Io => {
                ParseError::Malformed { line, column, message }
            }
        }
    }
}

/// Parse a response body into records, preserving source order.
///
/// Either every element parses or the whole call fails; partial results are
/// never returned.
pub fn parse(text: &str) -> Result<Vec<Record>, ParseError> {
    let records: Vec<Record> = serde_json::from_str(text)?;
    tracing::debug!(count = records.len(), "parsed records");
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Error types for Jot parsing and typed value access.

use thiserror::Error;

use crate::value::Kind;

/// Errors raised while tokenizing or parsing a Jot document, or by a typed
/// access against the wrong value kind.
///
/// Lexical and syntactic variants carry the 1-based line and column of the
/// construct that triggered the failure. A failed parse never yields a
/// partial tree.
#[derive(Error, Debug)]
pub enum JotError {
    /// A character that cannot start any token.
    #[error("unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    /// Input ended inside a string literal.
    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    /// Input ended inside a block comment.
    #[error("unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment { line: usize, column: usize },

    /// A backslash escape the string grammar does not define.
    #[error("invalid escape sequence '\\{found}' at line {line}, column {column}")]
    InvalidEscape {
        line: usize,
        column: usize,
        found: char,
    },

    /// The grammar required one token and the input supplied another.
    #[error("expected {expected}, found {found} at line {line}, column {column}")]
    UnexpectedToken {
        line: usize,
        column: usize,
        expected: &'static str,
        found: String,
    },

    /// Typed access (`as_int` and friends) against a value of another kind.
    #[error("expected a {expected} value, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// The reader backing `parse_reader` failed.
    #[error("failed to read document")]
    Io(#[from] std::io::Error),
}

impl JotError {
    /// Line/column of the failure, for variants that track a source position.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            JotError::UnexpectedCharacter { line, column, .. }
            | JotError::UnterminatedString { line, column }
            | JotError::UnterminatedComment { line, column }
            | JotError::InvalidEscape { line, column, .. }
            | JotError::UnexpectedToken { line, column, .. } => Some((*line, *column)),
            JotError::TypeMismatch { .. } | JotError::Io(_) => None,
        }
    }
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, JotError>;

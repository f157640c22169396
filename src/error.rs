//! Error types for TSON decoding.
//!
//! Every grammar violation is reported as [`Error::Syntax`], which pairs an
//! [`ErrorKind`] with the 1-based line and column where the decoder stopped.
//! Decoding never recovers: the first error ends the call.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the input does not follow the TSON grammar
//! - **Data Errors**: a well-formed tree does not fit the Rust type requested
//!   through [`from_str`](crate::from_str)
//! - **I/O Errors**: reading the input from a stream failed
//! - **Not Implemented**: the encode direction of the codec
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{decode, ErrorKind};
//!
//! let err = decode("user{name\"x\"").unwrap_err();
//! assert_eq!(err.kind(), Some(&ErrorKind::ExpectedCloseBrace));
//! assert_eq!(err.line(), Some(1));
//! assert_eq!(err.column(), Some(13));
//! assert!(err.to_string().contains("line 1, column 13"));
//! ```

use std::fmt;
use thiserror::Error;

/// The grammar rule that a TSON document violated.
///
/// The `Display` form of each kind is the human-readable message used in
/// [`Error`]'s own `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value was expected but the input was exhausted.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// No value form starts with this character.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// An object member did not start with a valid name character.
    #[error("expected property name")]
    ExpectedPropertyName,

    #[error("expected '}}' to close object")]
    ExpectedCloseBrace,

    #[error("expected ']' to close array")]
    ExpectedCloseBracket,

    /// A `<type>` specifier was not immediately followed by `[`.
    #[error("expected '[' after array type specifier")]
    ExpectedArrayOpenAfterTypeSpecifier,

    #[error("unterminated string")]
    UnterminatedString,

    /// The text after `?` is neither `true` nor `false`.
    #[error("invalid boolean literal")]
    InvalidBooleanLiteral,

    /// The integer lexeme (e.g. a lone `-`, or one out of `i64` range) did not parse.
    #[error("invalid integer literal '{0}'")]
    InvalidInteger(String),

    /// The double lexeme (e.g. a lone `-` or an empty one) did not parse.
    #[error("invalid double literal '{0}'")]
    InvalidDouble(String),

    /// Content remained after the single top-level value.
    #[error("unexpected trailing characters")]
    UnexpectedTrailingCharacters,

    /// Objects and arrays were nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    RecursionLimitExceeded(usize),
}

/// Represents all possible errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Grammar violation at a 1-based line and column.
    #[error("{kind} at line {line}, column {col}")]
    Syntax {
        kind: ErrorKind,
        line: usize,
        col: usize,
    },

    /// The requested operation has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// A decoded value did not match the requested Rust type.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error of the given kind at `line`/`col`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::{Error, ErrorKind};
    ///
    /// let err = Error::syntax(ErrorKind::UnterminatedString, 3, 7);
    /// assert_eq!(err.to_string(), "unterminated string at line 3, column 7");
    /// ```
    pub fn syntax(kind: ErrorKind, line: usize, col: usize) -> Self {
        Error::Syntax { kind, line, col }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the grammar rule violated, if this is a syntax error.
    #[must_use]
    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            Error::Syntax { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Returns the 1-based line of a syntax error.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the 1-based column of a syntax error.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Syntax { col, .. } => Some(*col),
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_display_includes_position() {
        let err = Error::syntax(ErrorKind::UnexpectedCharacter('%'), 2, 5);
        assert_eq!(
            err.to_string(),
            "unexpected character '%' at line 2, column 5"
        );
    }

    #[test]
    fn test_close_brace_message() {
        let err = Error::syntax(ErrorKind::ExpectedCloseBrace, 1, 1);
        assert_eq!(
            err.to_string(),
            "expected '}' to close object at line 1, column 1"
        );
    }

    #[test]
    fn test_accessors_on_non_syntax_errors() {
        let err = Error::NotImplemented("encode");
        assert_eq!(err.kind(), None);
        assert_eq!(err.line(), None);
        assert_eq!(err.column(), None);
        assert_eq!(err.to_string(), "encode is not implemented");
    }
}

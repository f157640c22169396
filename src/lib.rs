//! # serde_tson
//!
//! A decoder for TSON, a compact text format that marks every scalar with a
//! one-character sigil instead of relying on quoting conventions.
//!
//! ## What does TSON look like?
//!
//! ```text
//! user {
//!     name "John",          // strings start with "
//!     age #30,              // integers with #
//!     score =9.5,           /* doubles with = */
//!     isActive ?true,       // booleans with ?
//!     tags <">["a", -],     // arrays, optionally tagged with <type>
//!     nickname              // a name with no value is null
//! }
//! ```
//!
//! Inside arrays and at the top level a lone `-` is the undefined sentinel,
//! which decodes to `Null` just like a bare name's missing value.
//!
//! A value may carry a leading name. A named value decodes as an object with
//! a single member, so `user{...}` above becomes `{"user": {...}}`.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_tson::{decode, Value};
//!
//! let value = decode("user{name\"John\", age#30, isActive?true}").unwrap();
//! let user = value.get("user").unwrap();
//!
//! assert_eq!(user.get("name").and_then(Value::as_str), Some("John"));
//! assert_eq!(user.get("age").and_then(Value::as_i64), Some(30));
//! assert_eq!(user.get("isActive").and_then(Value::as_bool), Some(true));
//! ```
//!
//! ### Errors carry positions
//!
//! ```rust
//! use serde_tson::{decode, ErrorKind};
//!
//! let err = decode("?tru").unwrap_err();
//! assert_eq!(err.kind(), Some(&ErrorKind::InvalidBooleanLiteral));
//! assert_eq!((err.line(), err.column()), (Some(1), Some(2)));
//! ```
//!
//! ### Typed deserialization
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Point { x: i64, y: i64 }
//!
//! let point: Point = serde_tson::from_str("{x#1, y#2}").unwrap();
//! assert_eq!((point.x, point.y), (1, 2));
//! ```
//!
//! ## Logging
//!
//! Decoding emits [`tracing`] events (`debug` for the call and its failures,
//! `trace` for the decoded root). No subscriber is installed by this crate.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting is bounded by [`DecodeOptions::max_depth`] so hostile input
//!   cannot exhaust the stack
//! - Every failure is returned as an [`Error`]; the decoder does not panic

mod cursor;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
pub mod value;

pub use de::from_value;
pub use error::{Error, ErrorKind, Result};
pub use map::TsonMap;
pub use options::{DecodeOptions, DEFAULT_MAX_DEPTH};
pub use value::Value;

use serde::de::DeserializeOwned;
use std::io;

/// Decodes a TSON document into a [`Value`] tree.
///
/// Leading and trailing whitespace and comments are ignored; anything else
/// after the single top-level value is an error.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{decode, Value};
///
/// assert_eq!(decode("#42").unwrap(), Value::Int(42));
/// assert_eq!(decode("-").unwrap(), Value::Null);
/// assert_eq!(decode("a#1 // trailing comment\n").unwrap(), decode("a#1").unwrap());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the violated rule and its line/column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes a TSON document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{decode_with_options, DecodeOptions};
///
/// let deep = format!("{}{}", "[".repeat(300), "]".repeat(300));
/// assert!(decode_with_options(&deep, &DecodeOptions::default()).is_err());
/// assert!(decode_with_options(&deep, &DecodeOptions::unlimited()).is_ok());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the violated rule and its line/column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Value> {
    let span = tracing::debug_span!("decode", len = text.len());
    let _enter = span.enter();

    parser::parse(text, options).map_err(|err| {
        if let Error::Syntax { kind, line, col } = &err {
            tracing::debug!(%kind, line, col, "decode failed");
        }
        err
    })
}

/// Encodes a [`Value`] tree as TSON text.
///
/// Only the decode direction of the format is implemented.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`].
pub fn encode(_value: &Value) -> Result<String> {
    Err(Error::NotImplemented("encode"))
}

/// Deserialize an instance of type `T` from a string of TSON text.
///
/// # Examples
///
/// ```rust
/// let tags: Vec<String> = serde_tson::from_str("<\">[\"a\", \"b\"]").unwrap();
/// assert_eq!(tags, vec!["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TSON or the decoded tree cannot
/// be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Deserialize an instance of type `T` from bytes of TSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TSON,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of TSON.
///
/// The whole stream is read before decoding starts.
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// TSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct User {
        name: String,
        age: u32,
        #[serde(rename = "isActive")]
        is_active: bool,
    }

    #[test]
    fn test_decode_end_to_end() {
        let value = decode("user{name\"John\", age#30, isActive?true}").unwrap();
        assert_eq!(
            value,
            crate::tson!({ "user": { "name": "John", "age": 30, "isActive": true } })
        );
    }

    #[test]
    fn test_from_str_named_document() {
        let doc: std::collections::HashMap<String, User> =
            from_str("user{name\"Ana\", age#41, isActive?false}").unwrap();
        assert_eq!(
            doc.get("user"),
            Some(&User {
                name: "Ana".to_string(),
                age: 41,
                is_active: false
            })
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let result: Result<Value> = from_slice(&[b'"', 0xff, b'"']);
        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[test]
    fn test_from_reader() {
        let value: Value = from_reader(std::io::Cursor::new(b"n#5".to_vec())).unwrap();
        assert_eq!(value, Value::named("n", Value::Int(5)));
    }

    #[test]
    fn test_encode_is_not_implemented() {
        assert_eq!(encode(&Value::Null), Err(Error::NotImplemented("encode")));
    }
}

//! Configuration options for TSON decoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{decode_with_options, DecodeOptions, ErrorKind};
//!
//! let options = DecodeOptions::new().with_max_depth(2);
//! assert!(decode_with_options("[[#1]]", &options).is_ok());
//!
//! let err = decode_with_options("[[[#1]]]", &options).unwrap_err();
//! assert_eq!(err.kind(), Some(&ErrorKind::RecursionLimitExceeded(2)));
//! ```

/// Nesting limit applied by [`DecodeOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for TSON decoding.
///
/// The grammar itself has no knobs; the options bound the resources a
/// single decode call may use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of objects and arrays. `None` disables the check.
    pub max_depth: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (nesting limited to [`DEFAULT_MAX_DEPTH`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::{DecodeOptions, DEFAULT_MAX_DEPTH};
    ///
    /// assert_eq!(DecodeOptions::new().max_depth, Some(DEFAULT_MAX_DEPTH));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without a nesting limit.
    ///
    /// Deeply nested input recurses once per level, so only use this for
    /// trusted documents.
    #[must_use]
    pub fn unlimited() -> Self {
        DecodeOptions { max_depth: None }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }
}

//! Error types for set decoding.
//!
//! Decoding a [`Set`](crate::Set) from JSON is the only fallible operation
//! in this crate, so there is exactly one error type.

use std::fmt;

/// Represents a failure to decode a [`Set`](crate::Set) from JSON.
///
/// Raised when the input is not a syntactically valid JSON array, or when an
/// element does not decode as the set's element type. The underlying
/// [`serde_json::Error`] is kept and exposed through
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```rust
/// use keyset::{DeserializationError, Set};
///
/// let mut set: Set<i32> = Set::of([1, 2]);
/// let error: DeserializationError = set.deserialize_json("[1,2,3").unwrap_err();
///
/// assert!(error.is_eof());
/// assert!(set.is_empty()); // cleared before parsing
/// ```
#[derive(Debug)]
pub struct DeserializationError {
    inner: serde_json::Error,
}

impl DeserializationError {
    /// Line of the input where the failure was detected, starting at 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// Column of the input where the failure was detected, starting at 1.
    #[must_use]
    pub fn column(&self) -> usize {
        self.inner.column()
    }

    /// Returns `true` if the input was not syntactically valid JSON.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.inner.is_syntax()
    }

    /// Returns `true` if the input was valid JSON but not an array of the
    /// element type.
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.inner.is_data()
    }

    /// Returns `true` if the input ended before a complete array was read.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.inner.is_eof()
    }

    /// Unwraps the underlying `serde_json` error.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Error {
        self.inner
    }
}

impl From<serde_json::Error> for DeserializationError {
    fn from(inner: serde_json::Error) -> Self {
        Self { inner }
    }
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "failed to deserialize set from JSON: {}", self.inner)
    }
}

impl std::error::Error for DeserializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

//! # keyset
//!
//! A mutable hash set of distinct elements, with JSON array encoding.
//!
//! ## Overview
//!
//! [`Set`] stores its elements as the keys of a hash map whose values are
//! the unit presence marker. It supports:
//!
//! - **Construction**: empty, or from any iterator of values (duplicates collapse)
//! - **Queries**: `len`, `is_empty`, `contains`, iteration
//! - **Mutation**: `insert`/`insert_all`, `remove`/`remove_all`, `clear`
//! - **Conversion**: `to_vec`, `into_vec`
//! - **JSON**: encode to / decode from a plain JSON array
//!
//! Iteration and JSON array order are unspecified.
//!
//! ## Feature Flags
//!
//! - `serde` (default): serde impls, JSON methods and `DeserializationError`
//! - `fxhash`: hash elements with `FxHash` (not HashDoS resistant)
//! - `ahash`: hash elements with `aHash`
//! - `tracing`: emit `tracing` events from JSON decoding
//!
//! ## Example
//!
//! ```rust
//! use keyset::prelude::*;
//!
//! let mut set = Set::of([1, 2, 2, 3]);
//! assert_eq!(set.len(), 3);
//!
//! set.remove_all([1]);
//! assert_eq!(set, Set::of([2, 3]));
//! ```
//!
//! With the `serde` feature, `Set::to_json` and `Set::from_json` encode
//! and decode the set as a JSON array.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use keyset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Set;

    #[cfg(feature = "serde")]
    pub use crate::DeserializationError;
}

mod hasher;
mod set;

#[cfg(feature = "serde")]
mod error;
#[cfg(feature = "serde")]
mod json;

pub use hasher::SetHasher;
pub use set::{Set, SetIntoIterator, SetIterator};

#[cfg(feature = "serde")]
pub use error::DeserializationError;

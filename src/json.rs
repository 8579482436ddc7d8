//! JSON encoding for [`Set`].
//!
//! A set is written as a plain JSON array of its elements, each encoded with
//! the element type's own serde representation:
//!
//! ```text
//! [1,2,3]
//! ```
//!
//! There is no wrapping object. The array order is unspecified, and
//! duplicate entries collapse when an array is decoded.
//!
//! # Examples
//!
//! ```rust
//! use keyset::Set;
//!
//! let set = Set::of([2, 3]);
//! let json = set.to_json().unwrap();
//!
//! let restored: Set<i32> = Set::from_json(&json).unwrap();
//! assert_eq!(restored, set);
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DeserializationError, Set};

// =============================================================================
// Serde Support
// =============================================================================

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct SetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = Set::new();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// JSON Encode / Decode
// =============================================================================

impl<T: Serialize> Set<T> {
    /// Encodes the set as a JSON array string.
    ///
    /// The element order in the array is unspecified.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if an element fails to
    /// serialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::of([7]);
    /// assert_eq!(set.to_json().unwrap(), "[7]");
    /// ```
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Encodes the set as JSON array bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if an element fails to
    /// serialize.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl<T: DeserializeOwned + Hash + Eq> Set<T> {
    /// Decodes a new set from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializationError`] if `data` is not a valid JSON array
    /// or an element does not decode as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<String> = Set::from_json(r#"["a","b","a"]"#).unwrap();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_json(data: &str) -> Result<Self, DeserializationError> {
        let mut set = Self::new();
        set.deserialize_json(data)?;
        Ok(set)
    }

    /// Replaces the contents of the set with the elements of a JSON array.
    ///
    /// The set is cleared *before* `data` is parsed. If parsing fails the set
    /// is left empty; its previous contents are not restored.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializationError`] if `data` is not a valid JSON array
    /// or an element does not decode as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::of([9]);
    /// set.deserialize_json("[1,2,2,3]").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(!set.contains(&9));
    ///
    /// assert!(set.deserialize_json("[1,2,3").is_err());
    /// assert!(set.is_empty());
    /// ```
    pub fn deserialize_json(&mut self, data: &str) -> Result<(), DeserializationError> {
        self.clear();
        let values = serde_json::from_str::<Vec<T>>(data);
        self.absorb(values)
    }

    /// Byte-slice variant of [`Set::deserialize_json`], with the same
    /// clear-first behavior.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializationError`] if `data` is not a valid JSON array
    /// or an element does not decode as `T`.
    pub fn deserialize_json_slice(&mut self, data: &[u8]) -> Result<(), DeserializationError> {
        self.clear();
        let values = serde_json::from_slice::<Vec<T>>(data);
        self.absorb(values)
    }

    fn absorb(&mut self, values: serde_json::Result<Vec<T>>) -> Result<(), DeserializationError> {
        match values {
            Ok(values) => {
                self.insert_all(values);
                #[cfg(feature = "tracing")]
                tracing::trace!(elements = self.len(), "decoded set from JSON");
                Ok(())
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    line = error.line(),
                    column = error.column(),
                    error = %error,
                    "failed to decode set from JSON; set left empty"
                );
                Err(error.into())
            }
        }
    }
}

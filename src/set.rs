//! Mutable hash set of distinct elements.
//!
//! This module provides [`Set`], a set container that stores its elements as
//! the keys of a `HashMap<T, ()>`. The unit value is the presence marker:
//! an element belongs to the set exactly when its key is stored.
//!
//! - O(1) expected `contains`, `insert`, `remove`
//! - O(1) `len` and `is_empty`
//!
//! Iteration order is whatever the backing map produces. It is not insertion
//! order and may differ between runs or between two calls on sets with equal
//! contents.
//!
//! # Examples
//!
//! ```rust
//! use keyset::Set;
//!
//! let mut set = Set::of([1, 2, 2, 3]);
//! assert_eq!(set.len(), 3);
//!
//! set.insert_all([4, 5]);
//! set.remove_all([1]);
//!
//! assert!(set.contains(&4));
//! assert!(!set.contains(&1));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::hasher::SetHasher;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable set of distinct elements backed by a hash map.
///
/// `Set` owns its backing map outright. Cloning a set produces a deep,
/// independent copy: mutating the clone never affects the original, and the
/// other way around.
///
/// # Time Complexity
///
/// | Operation    | Complexity        |
/// |--------------|-------------------|
/// | `new`        | O(1)              |
/// | `of`         | O(n)              |
/// | `contains`   | O(1) expected     |
/// | `insert`     | O(1) expected     |
/// | `remove`     | O(1) expected     |
/// | `len`        | O(1)              |
/// | `clear`      | O(n)              |
/// | `to_vec`     | O(n)              |
///
/// # Examples
///
/// ```rust
/// use keyset::Set;
///
/// let original = Set::of(["a", "b"]);
/// let mut copy = original.clone();
/// copy.insert("c");
///
/// assert_eq!(original.len(), 2); // Original unchanged
/// assert_eq!(copy.len(), 3);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashMap<T, (), SetHasher>,
}

static_assertions::assert_impl_all!(Set<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Clone, Default, Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(SetHasher::default()),
        }
    }

    /// Returns the number of distinct elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::of([1, 2, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element from the set.
    ///
    /// The allocation of the backing map is kept for reuse; later inserts
    /// behave exactly as on a fresh set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    ///
    /// set.insert(4);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The order is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.keys(),
        }
    }

    /// Consumes the set and returns its elements as a vector.
    ///
    /// The vector holds exactly `len()` elements, each once, in unspecified
    /// order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_keys().collect()
    }
}

impl<T: Clone> Set<T> {
    /// Copies the elements of the set into a new vector.
    ///
    /// The vector holds exactly `len()` elements, each once. The order is
    /// unspecified and may differ between calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert_all([7, 8]);
    /// set.remove_all([7]);
    ///
    /// assert_eq!(set.to_vec(), vec![8]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.inner.keys().cloned());
        values
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set holding the distinct elements of `values`.
    ///
    /// Duplicates collapse to a single entry.
    ///
    /// # Arguments
    ///
    /// * `values` - The initial elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::of([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&4));
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut set = Self::new();
        set.insert_all(values);
        set
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set = Set::of(["hello".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was newly inserted, `false` if an equal
    /// element was already present. In the latter case the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));   // New element
    /// assert!(!set.insert(1));  // Already exists
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.inner.entry(element) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(());
                true
            }
        }
    }

    /// Inserts every element of `values`. Elements already present are left
    /// as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::of([1]);
    /// set.insert_all([1, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for element in values {
            self.insert(element);
        }
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present and removed, `false` if it
    /// was not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::of([1, 2]);
    /// assert!(set.remove(&1));   // Was present
    /// assert!(!set.remove(&1));  // Already removed
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Removes every element of `values` that is present. Absent values are
    /// ignored.
    ///
    /// Accepts owned elements as well as references to them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// set.remove_all([1, 9]);
    /// set.remove_all(&[2]);
    ///
    /// assert_eq!(set.to_vec(), vec![3]);
    /// ```
    pub fn remove_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for element in values {
            self.inner.remove(element.borrow());
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        Self::of(values)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Self::of(values)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

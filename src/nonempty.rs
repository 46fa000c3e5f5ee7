//! Non-empty vector type
//!
//! A failed parse always carries at least one violation. `NonEmptyVec<T>`
//! makes that a property of the type instead of a convention, so callers can
//! read the first violation without an `Option`.
//!
//! # Examples
//!
//! ```
//! use user_parse::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new("firstName", vec!["emailAddress"]);
//! assert_eq!(nev.head(), &"firstName");
//! assert_eq!(nev.tail(), &["emailAddress"]);
//! assert_eq!(nev.len(), 2);
//! ```

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::Semigroup;

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use user_parse::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::singleton(42);
    /// assert_eq!(nev.len(), 1);
    /// assert_eq!(nev.head(), &42);
    /// ```
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use user_parse::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2, 3]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Get the first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Number of elements, always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Convert to a regular `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(1 + self.tail.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

// Semigroup: concatenation
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

// Serializes as a plain sequence.
impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

//! Semigroup trait for merging violation lists
//!
//! A Semigroup is a type with an associative binary operation. The parser uses
//! it to merge the violations reported by independent field parsers into one
//! ordered list instead of stopping at the first failure.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use user_parse::Semigroup;
//!
//! let first = vec!["first name is empty"];
//! let second = vec!["email address is malformed"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["first name is empty", "email address is malformed"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value. Clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// The left operand's contents come first, so merging violations keeps
    /// field order.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        let v1 = vec!["firstName", "lastName"];
        let v2 = vec!["emailAddress"];
        assert_eq!(v1.combine(v2), vec!["firstName", "lastName", "emailAddress"]);
    }

    #[test]
    fn test_vec_semigroup_empty_left() {
        let v1: Vec<i32> = vec![];
        let v2 = vec![1, 2, 3];
        assert_eq!(v1.combine(v2), vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}

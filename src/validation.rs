//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result` but is built for the case where several
//! independent checks run over the same input and every failure should be
//! reported, not just the first one.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use user_parse::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["first name is empty"]);
//! let v2 = Validation::<i32, _>::failure(vec!["email address is malformed"]);
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["first name is empty", "email address is malformed"])
//! );
//! ```
//!
//! ## Validating tuples
//!
//! ```
//! use user_parse::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<_, Vec<&str>>::success("Bob"),
//!     Validation::<_, Vec<&str>>::success("Barker"),
//!     Validation::<_, Vec<&str>>::success(3),
//! ).validate_all();
//!
//! assert_eq!(result, Validation::Success(("Bob", "Barker", 3)));
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use user_parse::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use user_parse::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use user_parse::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs if this validation succeeded, so failures
    /// short-circuit: a later stage never sees the input of a failed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_parse::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success(5);
    /// let result = v.and_then(|x| {
    ///     if x > 0 {
    ///         Validation::success(x * 2)
    ///     } else {
    ///         Validation::failure(vec!["must be positive"])
    ///     }
    /// });
    /// assert_eq!(result, Validation::Success(10));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two independent validations, accumulating errors
    ///
    /// If both succeed, returns both values as a pair. If either or both fail,
    /// the errors are merged with `Semigroup::combine`, left side first.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_parse::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

/// Trait for combining multiple validations in a tuple
///
/// Every element is evaluated; on failure the errors of all failing elements
/// are combined in tuple order.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

// Builds the left-nested pattern `(((a, b), c), d)` produced by chaining `and`.
macro_rules! nested_pattern {
    (@acc [$acc:pat]) => { $acc };
    (@acc [$acc:pat] $next:ident $(, $rest:ident)*) => {
        nested_pattern!(@acc [($acc, $next)] $($rest),*)
    };
    ($first:ident $(, $rest:ident)*) => {
        nested_pattern!(@acc [$first] $($rest),*)
    };
}

macro_rules! impl_validate_all {
    ($first:ident $(, $rest:ident)*) => {
        impl<E: Semigroup, $first $(, $rest)*> ValidateAll<E>
            for (Validation<$first, E>, $(Validation<$rest, E>,)*)
        {
            type Output = ($first, $($rest,)*);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($first, $($rest,)*) = self;
                $first
                    $(.and($rest))*
                    .map(|nested| {
                        let nested_pattern!($first $(, $rest)*) = nested;
                        ($first, $($rest,)*)
                    })
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_round_trips() {
        let ok = Validation::from_result(Ok::<_, Vec<&str>>(42));
        assert_eq!(ok.into_result(), Ok(42));

        let err = Validation::from_result(Err::<i32, _>(vec!["error"]));
        assert_eq!(err.into_result(), Err(vec!["error"]));
    }

    #[test]
    fn test_map_on_failure_keeps_errors() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.map(|x| x * 2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_and_both_failure_accumulates_left_first() {
        let v1 = Validation::<i32, _>::failure(vec!["error1"]);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    }

    #[test]
    fn test_and_single_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        let mut called = false;
        let result = v.and_then(|x| {
            called = true;
            Validation::success(x * 2)
        });
        assert_eq!(result, Validation::Failure(vec!["error"]));
        assert!(!called);
    }

    #[test]
    fn test_validate_all_single() {
        let result = (Validation::<_, Vec<&str>>::success(1),).validate_all();
        assert_eq!(result, Validation::Success((1,)));
    }

    #[test]
    fn test_validate_all_four_success() {
        let result = (
            Validation::<_, Vec<&str>>::success("Bob"),
            Validation::<_, Vec<&str>>::success("Barker"),
            Validation::<_, Vec<&str>>::success("test@yes.com"),
            Validation::<_, Vec<&str>>::success(Some('B')),
        )
            .validate_all();
        assert_eq!(
            result,
            Validation::Success(("Bob", "Barker", "test@yes.com", Some('B')))
        );
    }

    #[test]
    fn test_validate_all_collects_every_failure_in_order() {
        let result = (
            Validation::<(), Vec<&str>>::success(()),
            Validation::<i32, Vec<&str>>::failure(vec!["second"]),
            Validation::<i32, Vec<&str>>::failure(vec!["third"]),
            Validation::<i32, Vec<&str>>::failure(vec!["fourth"]),
        )
            .validate_all();
        assert_eq!(
            result,
            Validation::Failure(vec!["second", "third", "fourth"])
        );
    }

    #[test]
    fn test_validate_all_eight() {
        let result = (
            Validation::<_, Vec<&str>>::success(1),
            Validation::<_, Vec<&str>>::success(2),
            Validation::<_, Vec<&str>>::success(3),
            Validation::<_, Vec<&str>>::success(4),
            Validation::<_, Vec<&str>>::success(5),
            Validation::<_, Vec<&str>>::success(6),
            Validation::<_, Vec<&str>>::success(7),
            Validation::<i32, _>::failure(vec!["eighth"]),
        )
            .validate_all();
        assert_eq!(result, Validation::Failure(vec!["eighth"]));
    }
}

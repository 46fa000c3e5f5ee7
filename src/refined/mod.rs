//! Refined types: values that carry proof of their own validity
//!
//! This module implements the "parse, don't validate" pattern used by the
//! user parser. A `Refined<T, P>` can only be obtained by running predicate
//! `P` over a `T`, so holding one is evidence that the check passed. There is
//! no unchecked constructor.
//!
//! # Example
//!
//! ```rust
//! use user_parse::refined::{And, MaxLength, NonEmpty, Positive, Refined};
//!
//! type ShortName = Refined<String, And<NonEmpty, MaxLength<50>>>;
//! type Quota = Refined<i64, Positive>;
//!
//! let name = ShortName::new("Bob".to_string()).unwrap();
//! assert_eq!(name.get(), "Bob");
//!
//! assert!(ShortName::new(String::new()).is_err());
//! assert!(Quota::new(0).is_err());
//! ```
//!
//! # Integration with Validation
//!
//! ```rust
//! use user_parse::{Validation, refined::{Refined, NonEmpty, Positive}};
//!
//! type NonEmptyString = Refined<String, NonEmpty>;
//! type Quota = Refined<i64, Positive>;
//!
//! let name = NonEmptyString::validate(String::new()).map_err(|e| vec![e.to_string()]);
//! let quota = Quota::validate(-5).map_err(|e| vec![e.to_string()]);
//!
//! // Both errors collected
//! match name.and(quota) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

mod combinators;
pub mod predicates;
mod serde_impl;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::Validation;

pub use combinators::{And, AndError};
pub use predicates::numeric::{InRange, Positive};
pub use predicates::string::{MaxLength, NonEmpty, ValidEmail};

/// A predicate that constrains values of type T.
///
/// Predicates are stateless marker types; the checked value lives in
/// [`Refined<T, P>`].
pub trait Predicate<T>: Send + Sync + 'static {
    /// Error returned when the predicate fails
    type Error: Send + Sync;

    /// Check if the value satisfies the predicate
    fn check(value: &T) -> Result<(), Self::Error>;

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type T that is guaranteed to satisfy predicate P.
///
/// `Refined<T, P>` has the same layout as `T`; the `PhantomData<P>` is
/// zero-sized.
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, checking the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use user_parse::refined::{Refined, Positive};
    ///
    /// assert!(Refined::<i64, Positive>::new(42).is_ok());
    /// assert!(Refined::<i64, Positive>::new(-5).is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, P::Error> {
        P::check(&value)?;
        Ok(Self {
            value,
            _predicate: PhantomData,
        })
    }

    /// Check a value, returning a [`Validation`] instead of a `Result`.
    ///
    /// Use this when the outcome feeds an accumulating combinator.
    pub fn validate(value: T) -> Validation<Self, P::Error> {
        Validation::from_result(Self::new(value))
    }

    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &P::description())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

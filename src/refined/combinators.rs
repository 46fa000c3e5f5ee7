//! Predicate combinators
//!
//! [`And<A, B>`] composes two predicates over the same value. The bounded name
//! type is `And<NonEmpty, MaxLength<50>>`.

use std::fmt;
use std::marker::PhantomData;

use super::Predicate;

/// Both predicates must hold
///
/// Both sides are always checked, so a value failing both reports both.
///
/// # Example
///
/// ```rust
/// use user_parse::refined::{And, AndError, MaxLength, NonEmpty, Refined};
///
/// type Initials = Refined<String, And<NonEmpty, MaxLength<3>>>;
///
/// assert!(Initials::new("BB".to_string()).is_ok());
/// assert!(matches!(Initials::new(String::new()), Err(AndError::First(_))));
/// assert!(matches!(Initials::new("ABCD".to_string()), Err(AndError::Second(_))));
/// ```
#[derive(Clone, Copy, Default)]
pub struct And<A, B>(PhantomData<(A, B)>);

impl<A, B> fmt::Debug for And<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "And<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

impl<T, A, B> Predicate<T> for And<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
{
    type Error = AndError<A::Error, B::Error>;

    fn check(value: &T) -> Result<(), Self::Error> {
        match (A::check(value), B::check(value)) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(a), Ok(())) => Err(AndError::First(a)),
            (Ok(()), Err(b)) => Err(AndError::Second(b)),
            (Err(a), Err(b)) => Err(AndError::Both(a, b)),
        }
    }

    fn description() -> &'static str {
        "both predicates must hold"
    }
}

/// Error type for the [`And`] combinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AndError<A, B> {
    /// First predicate failed
    First(A),
    /// Second predicate failed
    Second(B),
    /// Both predicates failed
    Both(A, B),
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for AndError<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndError::First(a) => write!(f, "{}", a),
            AndError::Second(b) => write!(f, "{}", b),
            AndError::Both(a, b) => write!(f, "{}; {}", a, b),
        }
    }
}

impl<A, B> std::error::Error for AndError<A, B>
where
    A: std::error::Error + 'static,
    B: std::error::Error + 'static,
{
}

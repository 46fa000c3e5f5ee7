//! Numeric predicates for refined types
//!
//! - [`Positive`]: value > 0
//! - [`InRange<MIN, MAX>`]: MIN <= value <= MAX
//!
//! # Example
//!
//! ```rust
//! use user_parse::refined::{Refined, Positive, InRange};
//!
//! type Quota = Refined<i64, Positive>;
//! assert!(Quota::new(1).is_ok());
//! assert!(Quota::new(0).is_err());
//!
//! type Percentage = Refined<i64, InRange<0, 100>>;
//! assert!(Percentage::new(100).is_ok());
//! assert!(Percentage::new(101).is_err());
//! ```

use super::super::Predicate;

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be in range [MIN, MAX] (inclusive)
#[derive(Debug, Clone, Copy, Default)]
pub struct InRange<const MIN: i64, const MAX: i64>;

macro_rules! impl_positive {
    ($($ty:ty),+) => {
        $(
            impl Predicate<$ty> for Positive {
                type Error = &'static str;

                fn check(value: &$ty) -> Result<(), Self::Error> {
                    if *value > 0 {
                        Ok(())
                    } else {
                        Err("value must be positive")
                    }
                }

                fn description() -> &'static str {
                    "positive number (> 0)"
                }
            }
        )+
    };
}

impl_positive!(i64, u64);

impl<const MIN: i64, const MAX: i64> Predicate<i64> for InRange<MIN, MAX> {
    type Error = String;

    fn check(value: &i64) -> Result<(), Self::Error> {
        if (MIN..=MAX).contains(value) {
            Ok(())
        } else {
            Err(format!("value {} must be in range [{}, {}]", value, MIN, MAX))
        }
    }

    fn description() -> &'static str {
        "value in range [MIN, MAX]"
    }
}

//! Predefined predicates
//!
//! - **Numeric constraints**: [`numeric::Positive`], [`numeric::InRange`]
//! - **String constraints**: [`string::NonEmpty`], [`string::MaxLength`],
//!   [`string::ValidEmail`]

pub mod numeric;
pub mod string;

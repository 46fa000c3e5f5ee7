//! # user-parse
//!
//! Parse untrusted JSON records into users, reporting every problem at once.
//!
//! A record becomes either an unverified user, with a positive number of
//! remaining readings, or a verified user, with a verification timestamp.
//! Every field of the result is a [refined](refined) type, so a [`User`] can
//! only exist if it passed validation.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use user_parse::{parse, User};
//!
//! let user = parse(&json!({
//!     "firstName": "Bob",
//!     "lastName": "Barker",
//!     "emailAddress": "test@yes.com",
//!     "verifiedDate": 1_000_000,
//! }))
//! .unwrap();
//! assert!(matches!(user, User::Verified(_)));
//!
//! // All field problems are reported together
//! let violations = parse(&json!({
//!     "firstName": "",
//!     "lastName": "Barker",
//!     "emailAddress": "test@",
//!     "remainingReadings": 3,
//! }))
//! .unwrap_err();
//!
//! assert_eq!(
//!     violations.messages(),
//!     vec![
//!         "First name value must be a string (size between 1 and 50 chars), got: ",
//!         "Email address value must be a valid email address, got: test@",
//!     ]
//! );
//! ```
//!
//! ## Building blocks
//!
//! - [`Validation`]: a `Result` that accumulates errors through a [`Semigroup`]
//! - [`NonEmptyVec`]: a vector with at least one element
//! - [`refined::Refined`]: a value paired with the predicate it satisfies
//!
//! ## Features
//!
//! - `tracing`: emit `debug!`/`trace!` events for each pipeline stage. Field
//!   values are never logged.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod nonempty;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod user;
pub mod validation;

// Re-exports
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use user::{
    parse, validate, ExtraneousFields, User, UserParser, Violation, Violations,
};
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::refined::{Predicate, Refined};
    pub use crate::semigroup::Semigroup;
    pub use crate::user::{
        parse, validate, CommonFields, ExtraneousFields, UnverifiedUser, User, UserParser,
        VerifiedUser, Violation, Violations,
    };
    pub use crate::validation::{ValidateAll, Validation};
}

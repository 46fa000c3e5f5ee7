//! Parsing untrusted JSON into users
//!
//! - [`shape`]: is the input an object with the mandatory keys?
//! - [`fields`]: one parser per field, producing refined types
//! - [`parser`]: the pipeline tying them together
//! - [`model`]: the validated [`User`] and its parts
//! - [`error`]: what went wrong, as [`Violations`]
//! - [`config`]: [`UserParser`] settings

pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod parser;
pub mod shape;

pub use config::{ExtraneousFields, UserParser};
pub use error::{Field, FieldError, Violation, Violations};
pub use model::{
    CommonFields, EmailAddress, NonEmptyString50, PositiveInteger, Timestamp, UnverifiedUser,
    User, VerifiedUser, MAX_TIMESTAMP, MIN_TIMESTAMP,
};
pub use parser::{parse, validate};
pub use shape::{user_like, UserLike};

//! Parser configuration
//!
//! [`UserParser`] is an immutable value: build it once with `with_*` methods
//! and share it freely.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use user_parse::{ExtraneousFields, UserParser};
//!
//! let parser = UserParser::new().with_extraneous_fields(ExtraneousFields::Reject);
//! assert_eq!(parser, UserParser::strict());
//!
//! let input = json!({
//!     "firstName": "Bob",
//!     "lastName": "Barker",
//!     "emailAddress": "test@yes.com",
//!     "remainingReadings": 3,
//!     "nickname": "Bobby",
//! });
//!
//! assert!(UserParser::new().parse(&input).is_ok());
//! assert!(parser.parse(&input).is_err());
//! ```

/// What to do with keys that carry no meaning for the parsed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtraneousFields {
    /// Drop them silently.
    #[default]
    Ignore,
    /// Report each one as a violation.
    ///
    /// Covers unknown keys and a non-null `remainingReadings` on a verified
    /// record.
    Reject,
}

/// Configured user parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserParser {
    extraneous_fields: ExtraneousFields,
}

impl UserParser {
    /// Parser with default settings: extraneous fields are ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that rejects extraneous fields.
    pub fn strict() -> Self {
        Self::new().with_extraneous_fields(ExtraneousFields::Reject)
    }

    /// Set the extraneous field policy.
    pub fn with_extraneous_fields(mut self, policy: ExtraneousFields) -> Self {
        self.extraneous_fields = policy;
        self
    }

    /// Current extraneous field policy.
    pub fn extraneous_fields(&self) -> ExtraneousFields {
        self.extraneous_fields
    }
}

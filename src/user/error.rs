//! Violations reported by the user parser
//!
//! Every problem found in the input becomes a [`Violation`]. A failed parse
//! returns them as [`Violations`], which always holds at least one entry and
//! keeps them in field declaration order.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let violations = user_parse::parse(&json!(42)).unwrap_err();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations.messages(),
//!     vec!["Input value must have at least firstName, lastName and emailAddress properties, got: 42"]
//! );
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{NonEmptyVec, Semigroup};

/// The typed fields of a user record, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `firstName`
    FirstName,
    /// `lastName`
    LastName,
    /// `emailAddress`
    EmailAddress,
    /// `middleNameInitial`
    MiddleNameInitial,
    /// `remainingReadings`
    RemainingReadings,
    /// `verifiedDate`
    VerifiedDate,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::EmailAddress,
        Field::MiddleNameInitial,
        Field::RemainingReadings,
        Field::VerifiedDate,
    ];

    /// The JSON key carrying this field.
    pub const fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::EmailAddress => "emailAddress",
            Field::MiddleNameInitial => "middleNameInitial",
            Field::RemainingReadings => "remainingReadings",
            Field::VerifiedDate => "verifiedDate",
        }
    }

    /// Human-readable field name used at the start of messages.
    pub const fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::EmailAddress => "Email address",
            Field::MiddleNameInitial => "Middle name initial",
            Field::RemainingReadings => "Remaining readings",
            Field::VerifiedDate => "Verified date",
        }
    }

    /// What a valid value of this field looks like.
    pub const fn expectation(self) -> &'static str {
        match self {
            Field::FirstName | Field::LastName => "a string (size between 1 and 50 chars)",
            Field::EmailAddress => "a valid email address",
            Field::MiddleNameInitial => "a single character",
            Field::RemainingReadings => "a positive integer",
            Field::VerifiedDate => {
                "a valid timestamp (integer between -8640000000000000 and 8640000000000000)"
            }
        }
    }
}

/// A typed field whose value failed its check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field
    pub field: Field,
    /// The rejected value, rendered for display
    pub got: String,
    /// Which constraint the value broke, when it had the right type
    pub reason: Option<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value must be {}, got: {}",
            self.field.label(),
            self.field.expectation(),
            self.got
        )
    }
}

impl std::error::Error for FieldError {}

/// A single problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The input is not an object carrying `firstName`, `lastName` and
    /// `emailAddress`.
    Shape {
        /// The whole input, serialized as JSON
        got: String,
    },
    /// A typed field failed its check.
    Field(FieldError),
    /// A key the record must not carry. Only reported by a parser configured
    /// with [`ExtraneousFields::Reject`](crate::user::ExtraneousFields::Reject).
    Extraneous {
        /// The unexpected key
        key: String,
        /// Its value, rendered for display
        got: String,
    },
}

impl Violation {
    /// Shape violation echoing the serialized input.
    pub fn shape(input: &Value) -> Self {
        Violation::Shape {
            got: input.to_string(),
        }
    }

    /// Field violation for `field`, where `value` is `None` if the key was absent.
    pub fn field(field: Field, value: Option<&Value>) -> Self {
        Violation::Field(FieldError {
            field,
            got: render(value),
            reason: None,
        })
    }

    /// Field violation for a value of the right type that broke a constraint.
    pub fn refinement(field: Field, value: Option<&Value>, reason: impl fmt::Display) -> Self {
        Violation::Field(FieldError {
            field,
            got: render(value),
            reason: Some(reason.to_string()),
        })
    }

    /// Violation for a key that should not be there.
    pub fn extraneous(key: impl Into<String>, value: &Value) -> Self {
        Violation::Extraneous {
            key: key.into(),
            got: render(Some(value)),
        }
    }

    /// The field this violation is about, if it is a field violation.
    pub fn field_name(&self) -> Option<Field> {
        match self {
            Violation::Field(error) => Some(error.field),
            Violation::Shape { .. } | Violation::Extraneous { .. } => None,
        }
    }
}

// Strings verbatim, absent keys as `undefined`, everything else as compact JSON.
fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Shape { got } => write!(
                f,
                "Input value must have at least firstName, lastName and emailAddress properties, got: {}",
                got
            ),
            Violation::Field(error) => error.fmt(f),
            Violation::Extraneous { key, got } => {
                write!(f, "Unexpected property {} is not allowed, got: {}", key, got)
            }
        }
    }
}

impl std::error::Error for Violation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Violation::Field(error) => Some(error),
            Violation::Shape { .. } | Violation::Extraneous { .. } => None,
        }
    }
}

// Serialized as the message text.
impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The non-empty, ordered list of violations from a failed parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(NonEmptyVec<Violation>);

impl Violations {
    /// Build from a possibly empty list; `None` when there is nothing to report.
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        NonEmptyVec::from_vec(violations).map(Violations)
    }

    /// The first violation.
    pub fn first(&self) -> &Violation {
        self.0.head()
    }

    /// Number of violations, always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// The human-readable message of each violation, in order.
    pub fn messages(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// Unwrap into the underlying non-empty vector.
    pub fn into_inner(self) -> NonEmptyVec<Violation> {
        self.0
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Violations(NonEmptyVec::singleton(violation))
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Violations(self.0.combine(other.0))
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = <NonEmptyVec<Violation> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            violation.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_violation_message() {
        let violation = Violation::field(Field::FirstName, Some(&json!("")));
        assert_eq!(
            violation.to_string(),
            "First name value must be a string (size between 1 and 50 chars), got: "
        );
        assert_eq!(violation.field_name(), Some(Field::FirstName));
    }

    #[test]
    fn test_refinement_keeps_reason_out_of_message() {
        let violation = Violation::refinement(
            Field::LastName,
            Some(&json!("")),
            "string cannot be empty",
        );
        assert_eq!(
            violation.to_string(),
            "Last name value must be a string (size between 1 and 50 chars), got: "
        );
        match violation {
            Violation::Field(error) => {
                assert_eq!(error.reason.as_deref(), Some("string cannot be empty"))
            }
            other => panic!("expected a field violation, got {other:?}"),
        }
    }

    #[test]
    fn test_render_absent_and_non_string_values() {
        let absent = Violation::field(Field::RemainingReadings, None);
        assert_eq!(
            absent.to_string(),
            "Remaining readings value must be a positive integer, got: undefined"
        );

        let object = Violation::field(Field::EmailAddress, Some(&json!({"a": 1})));
        assert_eq!(
            object.to_string(),
            r#"Email address value must be a valid email address, got: {"a":1}"#
        );
    }

    #[test]
    fn test_shape_violation_echoes_json() {
        let violation = Violation::shape(&json!({"firstName": "Bob"}));
        assert_eq!(
            violation.to_string(),
            r#"Input value must have at least firstName, lastName and emailAddress properties, got: {"firstName":"Bob"}"#
        );
        assert_eq!(violation.field_name(), None);
    }

    #[test]
    fn test_violations_combine_in_order() {
        let first = Violations::from(Violation::field(Field::FirstName, None));
        let second = Violations::from(Violation::field(Field::EmailAddress, None));
        let combined = first.combine(second);

        assert_eq!(combined.len(), 2);
        let fields: Vec<_> = combined.iter().filter_map(Violation::field_name).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::EmailAddress]);
    }

    #[test]
    fn test_violations_display_joins_messages() {
        let violations = Violations::from(Violation::extraneous("nickname", &json!("Bobby")))
            .combine(Violations::from(Violation::field(Field::LastName, Some(&json!(7)))));
        assert_eq!(
            violations.to_string(),
            "Unexpected property nickname is not allowed, got: Bobby; \
             Last name value must be a string (size between 1 and 50 chars), got: 7"
        );
    }

    #[test]
    fn test_violations_serialize_as_messages() {
        let violations = Violations::from(Violation::field(Field::MiddleNameInitial, Some(&json!("BB"))));
        assert_eq!(
            serde_json::to_value(&violations).unwrap(),
            json!(["Middle name initial value must be a single character, got: BB"])
        );
    }

    #[test]
    fn test_from_vec_empty_is_none() {
        assert!(Violations::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_field_keys_in_declaration_order() {
        let keys: Vec<_> = Field::ALL.iter().map(|field| field.key()).collect();
        assert_eq!(
            keys,
            vec![
                "firstName",
                "lastName",
                "emailAddress",
                "middleNameInitial",
                "remainingReadings",
                "verifiedDate"
            ]
        );
    }
}

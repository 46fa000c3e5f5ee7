//! Shape guard
//!
//! Checks that the input is a JSON object carrying the three mandatory keys
//! before any field is looked at. Values are not inspected here.

use serde_json::{Map, Value};

use super::error::{Field, Violation, Violations};
use crate::Validation;

/// Keys that must be present for the input to look like a user.
pub const REQUIRED_KEYS: [Field; 3] = [Field::FirstName, Field::LastName, Field::EmailAddress];

/// Key of the serialized variant tag. Tolerated on input and ignored.
pub const TAG_KEY: &str = "type";

/// A JSON object known to carry `firstName`, `lastName` and `emailAddress`.
#[derive(Debug, Clone, Copy)]
pub struct UserLike<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> UserLike<'a> {
    /// Raw value of `field`, `None` if the key is absent.
    pub fn get(&self, field: Field) -> Option<&'a Value> {
        self.fields.get(field.key())
    }

    /// Raw value of `field`, treating `null` like an absent key.
    pub fn get_present(&self, field: Field) -> Option<&'a Value> {
        self.get(field).filter(|value| !value.is_null())
    }

    /// Keys that are neither a known field nor the variant tag, sorted.
    pub fn unknown_keys(&self) -> Vec<(&'a str, &'a Value)> {
        let mut unknown: Vec<_> = self
            .fields
            .iter()
            .filter(|(key, _)| {
                key.as_str() != TAG_KEY && !Field::ALL.iter().any(|field| field.key() == key.as_str())
            })
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        unknown.sort_unstable_by_key(|(key, _)| *key);
        unknown
    }
}

/// Accept `input` as user-like or fail with a single shape violation.
pub fn user_like(input: &Value) -> Validation<UserLike<'_>, Violations> {
    match input {
        Value::Object(fields)
            if REQUIRED_KEYS
                .iter()
                .all(|field| fields.contains_key(field.key())) =>
        {
            Validation::success(UserLike { fields })
        }
        _ => Validation::failure(Violation::shape(input).into()),
    }
}

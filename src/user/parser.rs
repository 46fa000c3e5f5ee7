//! The parsing pipeline
//!
//! ```text
//! shape guard -> common fields -> dispatch -> variant fields
//! ```
//!
//! Each stage runs only if the previous one succeeded. Inside a stage every
//! field is checked, so one call reports all the problems of that stage.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::config::{ExtraneousFields, UserParser};
use super::error::{Field, Violation, Violations};
use super::fields;
use super::model::{CommonFields, UnverifiedUser, User, VerifiedUser};
use super::shape::{self, UserLike};
use crate::validation::ValidateAll;
use crate::Validation;

/// Common fields validated, variant not yet decided.
enum Candidate<'a> {
    Unverified {
        common: CommonFields,
        remaining_readings: Option<&'a Value>,
    },
    Verified {
        common: CommonFields,
        verified_date: &'a Value,
        remaining_readings: Option<&'a Value>,
    },
}

impl UserParser {
    /// Parse `input`, accumulating violations within each stage.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use user_parse::{UserParser, Validation};
    ///
    /// let result = UserParser::new().validate(&json!({
    ///     "firstName": "",
    ///     "lastName": "Barker",
    ///     "emailAddress": "nope",
    /// }));
    ///
    /// match result {
    ///     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn validate(&self, input: &Value) -> Validation<User, Violations> {
        let record = shape::user_like(input);

        #[cfg(feature = "tracing")]
        {
            if record.is_failure() {
                tracing::debug!("input rejected by shape guard");
            }
        }

        record
            .and_then(|record| self.common_fields(record))
            .map(dispatch)
            .and_then(|candidate| self.variant_fields(candidate))
            .map(|user| {
                #[cfg(feature = "tracing")]
                tracing::trace!(kind = user.kind(), "user parsed");
                user
            })
    }

    /// Parse `input` into a [`User`] or the full list of violations.
    pub fn parse(&self, input: &Value) -> Result<User, Violations> {
        self.validate(input).into_result()
    }

    fn common_fields<'a>(
        &self,
        record: UserLike<'a>,
    ) -> Validation<(CommonFields, UserLike<'a>), Violations> {
        let validated = (
            fields::first_name(record.get(Field::FirstName)),
            fields::last_name(record.get(Field::LastName)),
            fields::email_address(record.get(Field::EmailAddress)),
            fields::middle_name_initial(record.get(Field::MiddleNameInitial)),
            self.unknown_keys(&record),
        )
            .validate_all()
            .map(
                |(first_name, last_name, email_address, middle_name_initial, ())| {
                    let common = CommonFields {
                        first_name,
                        last_name,
                        email_address,
                        middle_name_initial,
                    };
                    (common, record)
                },
            );

        #[cfg(feature = "tracing")]
        {
            if let Validation::Failure(violations) = &validated {
                tracing::debug!(violations = violations.len(), "common fields rejected");
            }
        }

        validated
    }

    fn variant_fields(&self, candidate: Candidate<'_>) -> Validation<User, Violations> {
        match candidate {
            Candidate::Unverified {
                common,
                remaining_readings,
            } => fields::remaining_readings(remaining_readings).map(|remaining_readings| {
                User::from(UnverifiedUser {
                    common,
                    remaining_readings,
                })
            }),
            Candidate::Verified {
                common,
                verified_date,
                remaining_readings,
            } => (
                fields::verified_date(Some(verified_date)),
                self.stray_readings(remaining_readings),
            )
                .validate_all()
                .map(|(verified_date, ())| {
                    User::from(VerifiedUser {
                        common,
                        verified_date,
                    })
                }),
        }
    }

    fn unknown_keys(&self, record: &UserLike<'_>) -> Validation<(), Violations> {
        if self.extraneous_fields() == ExtraneousFields::Ignore {
            return Validation::success(());
        }
        let unknown = record
            .unknown_keys()
            .into_iter()
            .map(|(key, value)| Violation::extraneous(key, value))
            .collect();
        match Violations::from_vec(unknown) {
            Some(violations) => Validation::failure(violations),
            None => Validation::success(()),
        }
    }

    // A verified record has no use for a reading quota.
    fn stray_readings(&self, value: Option<&Value>) -> Validation<(), Violations> {
        match (self.extraneous_fields(), value) {
            (ExtraneousFields::Reject, Some(value)) if !value.is_null() => Validation::failure(
                Violation::extraneous(Field::RemainingReadings.key(), value).into(),
            ),
            _ => Validation::success(()),
        }
    }
}

// Only nullishness decides: "", 0 and false all select the verified branch.
fn dispatch((common, record): (CommonFields, UserLike<'_>)) -> Candidate<'_> {
    let remaining_readings = record.get(Field::RemainingReadings);
    match record.get_present(Field::VerifiedDate) {
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(variant = "unverified", "variant selected");
            Candidate::Unverified {
                common,
                remaining_readings,
            }
        }
        Some(verified_date) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(variant = "verified", "variant selected");
            Candidate::Verified {
                common,
                verified_date,
                remaining_readings,
            }
        }
    }
}

/// Parse `input` with the default configuration.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use user_parse::{parse, User};
///
/// let user = parse(&json!({
///     "firstName": "Bob",
///     "lastName": "Barker",
///     "middleNameInitial": "B",
///     "emailAddress": "test@yes.com",
///     "remainingReadings": 3,
/// }))
/// .unwrap();
///
/// match user {
///     User::Unverified(user) => assert_eq!(*user.remaining_readings.get(), 3),
///     User::Verified(_) => unreachable!(),
/// }
///
/// let violations = parse(&json!({"firstName": "Bob"})).unwrap_err();
/// assert_eq!(violations.len(), 1);
/// ```
pub fn parse(input: &Value) -> Result<User, Violations> {
    UserParser::new().parse(input)
}

/// Like [`parse`], returning a [`Validation`].
pub fn validate(input: &Value) -> Validation<User, Violations> {
    UserParser::new().validate(input)
}

impl TryFrom<&Value> for User {
    type Error = Violations;

    fn try_from(input: &Value) -> Result<Self, Self::Error> {
        parse(input)
    }
}

impl TryFrom<Value> for User {
    type Error = Violations;

    fn try_from(input: Value) -> Result<Self, Self::Error> {
        parse(&input)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = Value::deserialize(deserializer)?;
        parse(&input).map_err(serde::de::Error::custom)
    }
}

//! Validated user types
//!
//! Every field is a refined type, so holding a [`User`] is proof that the
//! record passed validation. A user is either unverified, with a quota of
//! remaining readings, or verified, with the time of verification. The enum
//! makes carrying both (or neither) unrepresentable.

use serde::Serialize;

use crate::refined::{And, InRange, MaxLength, NonEmpty, Positive, Refined, ValidEmail};

/// Earliest accepted verification timestamp, in milliseconds since the epoch.
pub const MIN_TIMESTAMP: i64 = -8_640_000_000_000_000;

/// Latest accepted verification timestamp, in milliseconds since the epoch.
pub const MAX_TIMESTAMP: i64 = 8_640_000_000_000_000;

/// A string of 1 to 50 characters.
pub type NonEmptyString50 = Refined<String, And<NonEmpty, MaxLength<50>>>;

/// A string shaped like an email address.
pub type EmailAddress = Refined<String, ValidEmail>;

/// An integer strictly greater than zero.
///
/// Counts larger than `u64::MAX` are clamped to it when parsed.
pub type PositiveInteger = Refined<u64, Positive>;

/// Milliseconds since the epoch within [`MIN_TIMESTAMP`, `MAX_TIMESTAMP`].
pub type Timestamp = Refined<i64, InRange<MIN_TIMESTAMP, MAX_TIMESTAMP>>;

/// Fields shared by both kinds of user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    /// Given name
    pub first_name: NonEmptyString50,
    /// Family name
    pub last_name: NonEmptyString50,
    /// Contact address
    pub email_address: EmailAddress,
    /// Optional single-character middle initial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name_initial: Option<char>,
}

/// A user who has not verified their account yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnverifiedUser {
    /// Name and contact details
    #[serde(flatten)]
    pub common: CommonFields,
    /// How many readings are left before verification is required
    pub remaining_readings: PositiveInteger,
}

/// A user who has verified their account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedUser {
    /// Name and contact details
    #[serde(flatten)]
    pub common: CommonFields,
    /// When the account was verified
    pub verified_date: Timestamp,
}

/// A successfully parsed user.
///
/// Serializes as a flat camelCase object tagged with `"type"`:
///
/// ```
/// use serde_json::json;
///
/// let user = user_parse::parse(&json!({
///     "firstName": "Bob",
///     "lastName": "Barker",
///     "emailAddress": "test@yes.com",
///     "verifiedDate": 1_000_000,
/// }))
/// .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&user).unwrap(),
///     json!({
///         "type": "VerifiedUser",
///         "firstName": "Bob",
///         "lastName": "Barker",
///         "emailAddress": "test@yes.com",
///         "verifiedDate": 1_000_000,
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum User {
    /// Still has a reading quota
    #[serde(rename = "UnverifiedUser")]
    Unverified(UnverifiedUser),
    /// Verified at a known time
    #[serde(rename = "VerifiedUser")]
    Verified(VerifiedUser),
}

impl User {
    /// The `type` tag this user serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            User::Unverified(_) => "UnverifiedUser",
            User::Verified(_) => "VerifiedUser",
        }
    }

    /// Returns true for [`User::Verified`].
    pub fn is_verified(&self) -> bool {
        matches!(self, User::Verified(_))
    }

    /// Fields shared by both variants.
    pub fn common(&self) -> &CommonFields {
        match self {
            User::Unverified(user) => &user.common,
            User::Verified(user) => &user.common,
        }
    }

    /// Remaining readings, present only on unverified users.
    pub fn remaining_readings(&self) -> Option<&PositiveInteger> {
        match self {
            User::Unverified(user) => Some(&user.remaining_readings),
            User::Verified(_) => None,
        }
    }

    /// Verification time, present only on verified users.
    pub fn verified_date(&self) -> Option<&Timestamp> {
        match self {
            User::Unverified(_) => None,
            User::Verified(user) => Some(&user.verified_date),
        }
    }
}

impl From<UnverifiedUser> for User {
    fn from(user: UnverifiedUser) -> Self {
        User::Unverified(user)
    }
}

impl From<VerifiedUser> for User {
    fn from(user: VerifiedUser) -> Self {
        User::Verified(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn common(initial: Option<char>) -> CommonFields {
        CommonFields {
            first_name: NonEmptyString50::new("Bob".to_string()).unwrap(),
            last_name: NonEmptyString50::new("Barker".to_string()).unwrap(),
            email_address: EmailAddress::new("test@yes.com".to_string()).unwrap(),
            middle_name_initial: initial,
        }
    }

    #[test]
    fn test_unverified_serializes_with_tag() {
        let user = User::from(UnverifiedUser {
            common: common(Some('B')),
            remaining_readings: PositiveInteger::new(3).unwrap(),
        });

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "type": "UnverifiedUser",
                "firstName": "Bob",
                "lastName": "Barker",
                "emailAddress": "test@yes.com",
                "middleNameInitial": "B",
                "remainingReadings": 3,
            })
        );
    }

    #[test]
    fn test_missing_initial_is_omitted() {
        let user = User::from(VerifiedUser {
            common: common(None),
            verified_date: Timestamp::new(0).unwrap(),
        });

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("middleNameInitial").is_none());
        assert_eq!(value["type"], "VerifiedUser");
    }

    #[test]
    fn test_accessors_follow_variant() {
        let unverified = User::from(UnverifiedUser {
            common: common(None),
            remaining_readings: PositiveInteger::new(1).unwrap(),
        });
        assert!(!unverified.is_verified());
        assert_eq!(unverified.kind(), "UnverifiedUser");
        assert_eq!(unverified.remaining_readings().map(|r| *r.get()), Some(1));
        assert!(unverified.verified_date().is_none());
        assert_eq!(unverified.common().first_name.get(), "Bob");

        let verified = User::from(VerifiedUser {
            common: common(None),
            verified_date: Timestamp::new(MAX_TIMESTAMP).unwrap(),
        });
        assert!(verified.is_verified());
        assert!(verified.remaining_readings().is_none());
        assert_eq!(verified.verified_date().map(|d| *d.get()), Some(MAX_TIMESTAMP));
    }

    #[test]
    fn test_timestamp_bounds() {
        assert!(Timestamp::new(MIN_TIMESTAMP).is_ok());
        assert!(Timestamp::new(MIN_TIMESTAMP - 1).is_err());
        assert!(Timestamp::new(MAX_TIMESTAMP + 1).is_err());
    }
}

//! Primitive field parsers
//!
//! Each parser takes the raw value of one key (`None` when the key is
//! absent) and either produces the refined field type or a single
//! [`Violation`] naming the field and the offending value.

use std::fmt;

use serde_json::Value;

use super::error::{Field, Violation, Violations};
use super::model::{EmailAddress, NonEmptyString50, PositiveInteger, Timestamp};
use crate::refined::{Predicate, Refined};
use crate::Validation;

/// Parse a first name.
pub fn first_name(value: Option<&Value>) -> Validation<NonEmptyString50, Violations> {
    refine(Field::FirstName, value, as_string(value))
}

/// Parse a last name.
pub fn last_name(value: Option<&Value>) -> Validation<NonEmptyString50, Violations> {
    refine(Field::LastName, value, as_string(value))
}

/// Parse an email address.
pub fn email_address(value: Option<&Value>) -> Validation<EmailAddress, Violations> {
    refine(Field::EmailAddress, value, as_string(value))
}

/// Parse an optional middle initial.
///
/// Absent and `null` both mean "no initial". Anything else must be a string
/// of exactly one character.
pub fn middle_name_initial(value: Option<&Value>) -> Validation<Option<char>, Violations> {
    match value {
        None | Some(Value::Null) => Validation::success(None),
        Some(Value::String(s)) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(initial), None) => Validation::success(Some(initial)),
                _ => reject(Field::MiddleNameInitial, value),
            }
        }
        Some(_) => reject(Field::MiddleNameInitial, value),
    }
}

/// Parse a strictly positive reading quota.
pub fn remaining_readings(value: Option<&Value>) -> Validation<PositiveInteger, Violations> {
    refine(Field::RemainingReadings, value, value.and_then(as_count))
}

/// Parse a verification timestamp.
pub fn verified_date(value: Option<&Value>) -> Validation<Timestamp, Violations> {
    refine(Field::VerifiedDate, value, value.and_then(as_integer))
}

fn as_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

/// Integer view of a JSON number. Floats count when they have no fractional
/// part and fit in an `i64`.
pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(integer) = number.as_i64() {
        return Some(integer);
    }
    let float = number.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

/// Non-negative integer view of a JSON number. Whole floats count; those
/// beyond `u64::MAX` saturate.
pub(crate) fn as_count(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(count) = number.as_u64() {
        return Some(count);
    }
    let float = number.as_f64()?;
    if float.fract() == 0.0 && float >= 0.0 {
        // `as` saturates at u64::MAX
        Some(float as u64)
    } else {
        None
    }
}

fn refine<T, P>(
    field: Field,
    value: Option<&Value>,
    candidate: Option<T>,
) -> Validation<Refined<T, P>, Violations>
where
    P: Predicate<T>,
    P::Error: fmt::Display,
{
    match candidate.map(Refined::new) {
        Some(Ok(refined)) => Validation::success(refined),
        Some(Err(reason)) => {
            Validation::failure(Violation::refinement(field, value, reason).into())
        }
        None => reject(field, value),
    }
}

fn reject<T>(field: Field, value: Option<&Value>) -> Validation<T, Violations> {
    Validation::failure(Violation::field(field, value).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::model::{MAX_TIMESTAMP, MIN_TIMESTAMP};
    use crate::{assert_failure, assert_success, assert_validation_errors};
    use serde_json::json;

    #[test]
    fn test_name_accepts_bounds() {
        assert_success!(first_name(Some(&json!("B"))));
        assert_success!(last_name(Some(&json!("x".repeat(50)))));
    }

    #[test]
    fn test_name_rejects_empty_long_and_non_string() {
        assert_validation_errors!(
            first_name(Some(&json!(""))),
            ["First name value must be a string (size between 1 and 50 chars), got: "]
        );
        assert_failure!(last_name(Some(&json!("x".repeat(51)))));
        assert_validation_errors!(
            last_name(Some(&json!(null))),
            ["Last name value must be a string (size between 1 and 50 chars), got: null"]
        );
        assert_validation_errors!(
            first_name(None),
            ["First name value must be a string (size between 1 and 50 chars), got: undefined"]
        );
    }

    fn reason<T: std::fmt::Debug>(validation: Validation<T, Violations>) -> Option<String> {
        match validation.into_result().unwrap_err().first() {
            Violation::Field(error) => error.reason.clone(),
            other => panic!("expected a field violation, got {other:?}"),
        }
    }

    #[test]
    fn test_constraint_reason_is_kept() {
        assert_eq!(
            reason(first_name(Some(&json!("x".repeat(51))))),
            Some("string length 51 exceeds maximum 50".to_string())
        );
        assert_eq!(
            reason(last_name(Some(&json!("")))),
            Some("string cannot be empty".to_string())
        );
        assert_eq!(
            reason(remaining_readings(Some(&json!(0)))),
            Some("value must be positive".to_string())
        );
        assert_eq!(
            reason(verified_date(Some(&json!(MAX_TIMESTAMP + 1)))),
            Some("value 8640000000000001 must be in range [-8640000000000000, 8640000000000000]".to_string())
        );
    }

    #[test]
    fn test_wrong_type_has_no_reason() {
        assert_eq!(reason(first_name(Some(&json!(7)))), None);
        assert_eq!(reason(remaining_readings(Some(&json!("3")))), None);
    }

    #[test]
    fn test_email() {
        let email = email_address(Some(&json!("test@yes.com"))).into_result().unwrap();
        assert_eq!(email.get(), "test@yes.com");

        assert_validation_errors!(
            email_address(Some(&json!("test@"))),
            ["Email address value must be a valid email address, got: test@"]
        );
        assert_failure!(email_address(Some(&json!(["test@yes.com"]))));
    }

    #[test]
    fn test_middle_initial_absent_or_null() {
        assert_eq!(middle_name_initial(None), Validation::success(None));
        assert_eq!(
            middle_name_initial(Some(&json!(null))),
            Validation::success(None)
        );
    }

    #[test]
    fn test_middle_initial_single_char() {
        assert_eq!(
            middle_name_initial(Some(&json!("B"))),
            Validation::success(Some('B'))
        );
        assert_eq!(
            middle_name_initial(Some(&json!("É"))),
            Validation::success(Some('É'))
        );
    }

    #[test]
    fn test_middle_initial_rejects_other_values() {
        assert_validation_errors!(
            middle_name_initial(Some(&json!("BB"))),
            ["Middle name initial value must be a single character, got: BB"]
        );
        assert_failure!(middle_name_initial(Some(&json!(""))));
        assert_validation_errors!(
            middle_name_initial(Some(&json!(7))),
            ["Middle name initial value must be a single character, got: 7"]
        );
    }

    #[test]
    fn test_remaining_readings_boundary() {
        assert_validation_errors!(
            remaining_readings(Some(&json!(0))),
            ["Remaining readings value must be a positive integer, got: 0"]
        );
        assert_success!(remaining_readings(Some(&json!(1))));
        assert_success!(remaining_readings(Some(&json!(3.0))));
        assert_failure!(remaining_readings(Some(&json!(2.5))));
        assert_failure!(remaining_readings(Some(&json!("3"))));
        assert_validation_errors!(
            remaining_readings(None),
            ["Remaining readings value must be a positive integer, got: undefined"]
        );
    }

    #[test]
    fn test_verified_date_boundary() {
        assert_success!(verified_date(Some(&json!(MAX_TIMESTAMP))));
        assert_success!(verified_date(Some(&json!(MIN_TIMESTAMP))));
        assert_validation_errors!(
            verified_date(Some(&json!(8_640_000_000_000_001_i64))),
            ["Verified date value must be a valid timestamp (integer between -8640000000000000 and 8640000000000000), got: 8640000000000001"]
        );
        assert_failure!(verified_date(Some(&json!(""))));
        assert_failure!(verified_date(Some(&json!(false))));
    }

    #[test]
    fn test_as_integer() {
        assert_eq!(as_integer(&json!(5)), Some(5));
        assert_eq!(as_integer(&json!(-5.0)), Some(-5));
        assert_eq!(as_integer(&json!(0.5)), None);
        assert_eq!(as_integer(&json!(u64::MAX)), None);
        assert_eq!(as_integer(&json!(1e300)), None);
        assert_eq!(as_integer(&json!("1")), None);
    }

    #[test]
    fn test_as_count() {
        assert_eq!(as_count(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(as_count(&json!(3.0)), Some(3));
        assert_eq!(as_count(&json!(1e20)), Some(u64::MAX));
        assert_eq!(as_count(&json!(-1)), None);
        assert_eq!(as_count(&json!(-2.0)), None);
        assert_eq!(as_count(&json!(1.5)), None);
        assert_eq!(as_count(&json!(true)), None);
    }

    #[test]
    fn test_remaining_readings_beyond_i64() {
        let max = remaining_readings(Some(&json!(u64::MAX))).into_result().unwrap();
        assert_eq!(*max.get(), u64::MAX);

        let huge = remaining_readings(Some(&json!(1e20))).into_result().unwrap();
        assert_eq!(*huge.get(), u64::MAX);

        assert_validation_errors!(
            remaining_readings(Some(&json!(-3))),
            ["Remaining readings value must be a positive integer, got: -3"]
        );
    }
}

//! Assertion macros for validations
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use user_parse::{assert_failure, assert_success, assert_validation_errors, validate};
//!
//! assert_success!(validate(&json!({
//!     "firstName": "Bob",
//!     "lastName": "Barker",
//!     "emailAddress": "test@yes.com",
//!     "remainingReadings": 3,
//! })));
//!
//! assert_failure!(validate(&json!(null)));
//!
//! assert_validation_errors!(
//!     validate(&json!([])),
//!     ["Input value must have at least firstName, lastName and emailAddress properties, got: []"]
//! );
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use user_parse::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use user_parse::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given messages, in order.
///
/// The error must be [`Violations`](crate::Violations).
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use user_parse::{assert_validation_errors, validate};
///
/// assert_validation_errors!(
///     validate(&json!({
///         "firstName": "",
///         "lastName": "Barker",
///         "emailAddress": "test@",
///         "remainingReadings": 3,
///     })),
///     [
///         "First name value must be a string (size between 1 and 50 chars), got: ",
///         "Email address value must be a valid email address, got: test@",
///     ]
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let errors: $crate::Violations = errors;
                assert_eq!(errors.messages(), $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use self::strategies::valid_user_input;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;
    use serde_json::{json, Value};

    use crate::user::{MAX_TIMESTAMP, MIN_TIMESTAMP};
    use crate::Validation;

    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary,
        E: Arbitrary,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::success),
                any_with::<E>(e_params).prop_map(Validation::failure),
            ]
            .boxed()
        }
    }

    /// JSON records that always parse, covering both variants.
    ///
    /// Requires the `proptest` feature.
    pub fn valid_user_input() -> impl Strategy<Value = Value> {
        let name = "[A-Za-z][A-Za-z' -]{0,49}";
        let email = "[a-z0-9]{1,10}(\\.[a-z0-9]{1,5})?@[a-z]{1,10}\\.[a-z]{2,5}";
        let initial = prop::option::of(any::<char>());
        let variant = prop_oneof![
            (1u64..=u64::MAX).prop_map(|readings| ("remainingReadings", json!(readings))),
            (MIN_TIMESTAMP..=MAX_TIMESTAMP).prop_map(|date| ("verifiedDate", json!(date))),
        ];

        (name, name, email, initial, variant).prop_map(
            |(first_name, last_name, email_address, initial, (key, value))| {
                let mut input = json!({
                    "firstName": first_name,
                    "lastName": last_name,
                    "emailAddress": email_address,
                });
                if let Some(initial) = initial {
                    input["middleNameInitial"] = json!(initial.to_string());
                }
                input[key] = value;
                input
            },
        )
    }
}

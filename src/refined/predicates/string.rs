//! String predicates for refined types
//!
//! - [`NonEmpty`]: string is not empty
//! - [`MaxLength<N>`]: string has at most N characters
//! - [`ValidEmail`]: string is an email address
//!
//! Lengths count Unicode scalar values (`char`s), not bytes, so `"Zoë"` has
//! length 3.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use super::super::Predicate;

/// String must not be empty
///
/// Whitespace counts as content: `" "` passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Predicate<String> for NonEmpty {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if value.is_empty() {
            Err("string cannot be empty")
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-empty string"
    }
}

/// String length must be at most N characters
///
/// # Example
///
/// ```rust
/// use user_parse::refined::{Refined, MaxLength};
///
/// type Short = Refined<String, MaxLength<3>>;
///
/// assert!(Short::new("Zoë".to_string()).is_ok());
/// assert!(Short::new("Zoey".to_string()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLength<const N: usize>;

impl<const N: usize> Predicate<String> for MaxLength<N> {
    type Error = String;

    fn check(value: &String) -> Result<(), Self::Error> {
        let length = value.chars().count();
        if length <= N {
            Ok(())
        } else {
            Err(format!("string length {} exceeds maximum {}", length, N))
        }
    }

    fn description() -> &'static str {
        "string with maximum length"
    }
}

/// String must be an email address
///
/// Accepts a dot-atom or quoted local part, `@`, then either a dotted domain
/// name or a bracketed IPv4/tagged address literal. Matching is
/// ASCII case-insensitive and covers the whole string.
///
/// # Example
///
/// ```rust
/// use user_parse::refined::{Refined, ValidEmail};
///
/// type Email = Refined<String, ValidEmail>;
///
/// assert!(Email::new("test@yes.com".to_string()).is_ok());
/// assert!(Email::new("Bob.Barker@[192.168.0.1]".to_string()).is_ok());
/// assert!(Email::new("no-at-sign.com".to_string()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidEmail;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = concat!(
            r#"^(?:"#,
            // local part: dot-atom or quoted string
            r#"(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
            r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
            r#"@"#,
            // domain name
            r#"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
            // or address literal
            r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}"#,
            r#"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9]"#,
            r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])"#,
            r#")$"#,
        );
        // ASCII-only case folding: `ſ` and the Kelvin sign must not match `s`/`k`
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl Predicate<String> for ValidEmail {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if email_regex().is_match(value) {
            Ok(())
        } else {
            Err("string is not a valid email address")
        }
    }

    fn description() -> &'static str {
        "email address"
    }
}

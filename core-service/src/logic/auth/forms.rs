use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

static UPPER_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static LOWER_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static SPECIAL_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignInForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub remember_me: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "validate_password_rules")
    )]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords don't match"))]
    pub confirm_password: String,
}

/// Live indicators shown under the sign-up password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_special_char: bool,
    pub is_long_enough: bool,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        Self {
            has_upper_case: UPPER_CASE.is_match(password),
            has_lower_case: LOWER_CASE.is_match(password),
            has_special_char: SPECIAL_CHAR.is_match(password),
            is_long_enough: password.chars().count() >= MIN_PASSWORD_LEN,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.has_upper_case && self.has_lower_case && self.has_special_char && self.is_long_enough
    }
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Character-class rules; length is checked separately
fn validate_password_rules(password: &str) -> Result<(), ValidationError> {
    let strength = PasswordStrength::of(password);

    if !strength.has_upper_case {
        return Err(rule_error(
            "password_upper_case",
            "Password must contain at least one uppercase letter",
        ));
    }
    if !strength.has_lower_case {
        return Err(rule_error(
            "password_lower_case",
            "Password must contain at least one lowercase letter",
        ));
    }
    if !strength.has_special_char {
        return Err(rule_error(
            "password_special_char",
            "Password must contain at least one special character",
        ));
    }
    Ok(())
}

//! Auth Module - Sign-in / Sign-up form validation
//!
//! Only the form schemas live here. There is no account store; a valid form is
//! handed back to the caller unchanged.

pub mod forms;

use std::collections::BTreeMap;

use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub use forms::{PasswordStrength, SignInForm, SignUpForm};

/// Field name -> messages, in the order the validators reported them
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("form validation failed: {}", summary(.fields))]
pub struct FormErrors {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        Self { fields }
    }
}

fn summary(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, msgs)| format!("{}: {}", field, msgs.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_sign_in(form: &SignInForm) -> Result<(), FormErrors> {
    form.validate().map_err(FormErrors::from)
}

pub fn validate_sign_up(form: &SignUpForm) -> Result<(), FormErrors> {
    let result = form.validate().map_err(FormErrors::from);
    if let Err(e) = &result {
        log::debug!("Sign-up rejected: {}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(name: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            full_name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_sign_in_valid() {
        let form = SignInForm {
            email: "analyst@example.com".to_string(),
            password: "x".to_string(),
            remember_me: Some(true),
        };
        assert!(validate_sign_in(&form).is_ok());
    }

    #[test]
    fn test_sign_in_errors() {
        let form = SignInForm {
            email: "not-an-email".to_string(),
            password: String::new(),
            remember_me: None,
        };
        let errors = validate_sign_in(&form).unwrap_err();

        assert_eq!(errors.messages("email"), ["Please enter a valid email address"]);
        assert_eq!(errors.messages("password"), ["Password is required"]);
    }

    #[test]
    fn test_sign_up_valid() {
        let form = sign_up("John Doe", "john@example.com", "Secur3!pass", "Secur3!pass");
        assert!(validate_sign_up(&form).is_ok());
    }

    #[test]
    fn test_sign_up_short_name() {
        let form = sign_up("J", "john@example.com", "Secur3!pass", "Secur3!pass");
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(errors.messages("full_name"), ["Full name must be at least 2 characters"]);
    }

    #[test]
    fn test_sign_up_password_rules() {
        let errors = validate_sign_up(&sign_up("John", "john@example.com", "short", "short"))
            .unwrap_err();
        let msgs = errors.messages("password");
        assert!(msgs.contains(&"Password must be at least 8 characters".to_string()));
        let upper = "Password must contain at least one uppercase letter".to_string();
        assert!(msgs.contains(&upper));

        let form = sign_up("John", "john@example.com", "NOLOWER1!", "NOLOWER1!");
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one lowercase letter"]
        );

        let form = sign_up("John", "john@example.com", "NoSpecial1", "NoSpecial1");
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(
            errors.messages("password"),
            ["Password must contain at least one special character"]
        );
    }

    #[test]
    fn test_sign_up_confirm_mismatch() {
        let form = sign_up("John Doe", "john@example.com", "Secur3!pass", "Secur3!pasz");
        let errors = validate_sign_up(&form).unwrap_err();

        assert_eq!(errors.messages("confirm_password"), ["Passwords don't match"]);
        assert!(errors.messages("password").is_empty());
        assert!(errors.to_string().contains("confirm_password"));
    }

    #[test]
    fn test_password_strength() {
        let weak = PasswordStrength::of("abc");
        assert!(!weak.has_upper_case);
        assert!(weak.has_lower_case);
        assert!(!weak.is_long_enough);
        assert!(!weak.is_strong());

        let strong = PasswordStrength::of("Abcdefg{");
        assert!(strong.has_special_char);
        assert!(strong.is_strong());
    }
}

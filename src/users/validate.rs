use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::users::repo_types::NewUser;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const EMAIL_MAX: usize = 254;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 128;
const NAME_MAX: usize = 100;

/// A field of [`NewUser`] that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(if len == 0 {
            ValidationError::new(field, "is required")
        } else {
            ValidationError::new(field, format!("must be at least {min} characters"))
        });
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

impl NewUser {
    /// Checks required fields and formats, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("username", &self.username, USERNAME_MIN, USERNAME_MAX)?;
        if !is_valid_username(&self.username) {
            return Err(ValidationError::new(
                "username",
                "may only contain letters, digits, '_', '.' and '-'",
            ));
        }

        check_length("email", &self.email, 1, EMAIL_MAX)?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new("email", "is not a valid address"));
        }

        check_length("password", &self.password, PASSWORD_MIN, PASSWORD_MAX)?;

        if let Some(first_name) = &self.first_name {
            check_length("first_name", first_name, 0, NAME_MAX)?;
        }
        if let Some(last_name) = &self.last_name {
            check_length("last_name", last_name, 0, NAME_MAX)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewUser {
        NewUser::new("bob", "bob@x.com", "Secret123!").with_first_name("Bob")
    }

    #[test]
    fn accepts_well_formed_user() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_username() {
        let user = NewUser {
            username: String::new(),
            ..valid()
        };
        let err = user.validate().unwrap_err();
        assert_eq!(err.field, "username");
        assert_eq!(err.reason, "is required");
    }

    #[test]
    fn rejects_username_with_spaces_or_too_short() {
        let spaced = NewUser {
            username: "bob smith".into(),
            ..valid()
        };
        assert_eq!(spaced.validate().unwrap_err().field, "username");

        let short = NewUser {
            username: "bo".into(),
            ..valid()
        };
        let err = short.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid username: must be at least 3 characters");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "bob", "bob@x", "bob @x.com", "@x.com"] {
            let user = NewUser {
                email: email.into(),
                ..valid()
            };
            assert_eq!(user.validate().unwrap_err().field, "email", "email {email:?}");
        }
    }

    #[test]
    fn rejects_short_and_oversized_passwords() {
        let short = NewUser {
            password: "short".into(),
            ..valid()
        };
        assert_eq!(short.validate().unwrap_err().field, "password");

        let long = NewUser {
            password: "x".repeat(PASSWORD_MAX + 1),
            ..valid()
        };
        assert_eq!(long.validate().unwrap_err().field, "password");
    }

    #[test]
    fn optional_names_are_length_checked_only_when_present() {
        let no_names = NewUser::new("alice", "alice@x.com", "hunter2hunter2");
        assert!(no_names.validate().is_ok());

        let long_last = valid().with_last_name("y".repeat(NAME_MAX + 1));
        assert_eq!(long_last.validate().unwrap_err().field, "last_name");
    }
}

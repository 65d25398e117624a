//! Email/password pair bound once and validated on demand

use std::fmt;

use crate::email::{ensure_email, validate_email};
use crate::error::ValidationError;
use crate::password::{check_password, ensure_password, validate_password, PasswordReport};

/// A candidate email/password pair
///
/// Holds the raw strings; nothing is validated at construction. Each method
/// runs the same checks as the free functions.
///
/// # Examples
/// ```
/// use credcheck::Credentials;
///
/// let creds = Credentials::new("test@example.com", "StrongPass1!");
/// assert!(creds.validate_email());
/// assert!(creds.validate_password());
/// assert!(creds.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Checks the email format
    pub fn validate_email(&self) -> bool {
        validate_email(&self.email)
    }

    /// Checks that the password satisfies every strength rule
    pub fn validate_password(&self) -> bool {
        validate_password(&self.password)
    }

    /// Per-rule breakdown of the password check
    pub fn password_report(&self) -> PasswordReport {
        check_password(&self.password)
    }

    /// Validates both fields, email first
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_email(&self.email)?;
        ensure_password(&self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

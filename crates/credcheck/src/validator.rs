//! Object-style entry point over the free validation functions

use crate::email;
use crate::password::{self, PasswordReport};

/// Stateless validator
///
/// Carries no configuration: every instance behaves the same, and it is
/// `Copy` so it can be handed to any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// See [`crate::validate_email`]
    pub fn validate_email(&self, email: &str) -> bool {
        email::validate_email(email)
    }

    /// See [`crate::validate_password`]
    pub fn validate_password(&self, password: &str) -> bool {
        password::validate_password(password)
    }

    /// See [`crate::check_password`]
    pub fn check_password(&self, password: &str) -> PasswordReport {
        password::check_password(password)
    }
}

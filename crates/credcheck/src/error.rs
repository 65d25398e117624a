use thiserror::Error;

use crate::password::PasswordRule;

/// Why a candidate was rejected
///
/// Never carries the rejected password itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is invalid")]
    InvalidEmail,

    #[error("password is too weak: {}", describe(.failed))]
    WeakPassword { failed: Vec<PasswordRule> },
}

fn describe(failed: &[PasswordRule]) -> String {
    failed
        .iter()
        .map(|rule| rule.description())
        .collect::<Vec<_>>()
        .join(", ")
}

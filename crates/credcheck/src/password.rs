//! Password strength validation
//!
//! A password is strong when all five rules hold:
//! - at least 8 bytes long
//! - at least one ASCII uppercase letter
//! - at least one ASCII lowercase letter
//! - at least one ASCII digit
//! - at least one special character: anything outside `[A-Za-z0-9_]`
//!
//! Underscore is a word character and does not count as special on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum password length, in bytes
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// One of the five password strength rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// 8+ bytes
    MinimumLength,
    /// At least one `A-Z`
    Uppercase,
    /// At least one `a-z`
    Lowercase,
    /// At least one `0-9`
    Digit,
    /// At least one character outside `[A-Za-z0-9_]`
    SpecialCharacter,
}

impl PasswordRule {
    /// All rules, in evaluation order
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinimumLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::SpecialCharacter,
    ];

    /// Stable snake_case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            PasswordRule::MinimumLength => "minimum_length",
            PasswordRule::Uppercase => "uppercase",
            PasswordRule::Lowercase => "lowercase",
            PasswordRule::Digit => "digit",
            PasswordRule::SpecialCharacter => "special_character",
        }
    }

    /// Human-readable requirement
    pub fn description(self) -> &'static str {
        match self {
            PasswordRule::MinimumLength => "must be at least 8 bytes long",
            PasswordRule::Uppercase => "must contain at least one uppercase letter",
            PasswordRule::Lowercase => "must contain at least one lowercase letter",
            PasswordRule::Digit => "must contain at least one digit",
            PasswordRule::SpecialCharacter => "must contain at least one special character",
        }
    }

    /// Whether `password` satisfies this rule
    fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            PasswordRule::MinimumLength => has_minimum_length(password),
            PasswordRule::Uppercase => has_uppercase_letter(password),
            PasswordRule::Lowercase => has_lowercase_letter(password),
            PasswordRule::Digit => has_digit(password),
            PasswordRule::SpecialCharacter => has_special_character(password),
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating every rule against one password
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReport {
    failed: Vec<PasswordRule>,
}

impl PasswordReport {
    /// True when no rule failed
    pub fn is_strong(&self) -> bool {
        self.failed.is_empty()
    }

    /// Failed rules, in rule order
    pub fn failures(&self) -> &[PasswordRule] {
        &self.failed
    }

    /// First failed rule in rule order, if any
    pub fn first_failure(&self) -> Option<PasswordRule> {
        self.failed.first().copied()
    }

    /// Whether `rule` is among the failed rules
    pub fn has_failed(&self, rule: PasswordRule) -> bool {
        self.failed.contains(&rule)
    }

    /// Consumes the report, returning the failed rules
    pub fn into_failures(self) -> Vec<PasswordRule> {
        self.failed
    }
}

/// Validates password strength
///
/// Returns `true` only if all five rules hold. Stops at the first failing
/// rule; use [`check_password`] to learn which rules failed.
///
/// # Examples
/// ```
/// use credcheck::validate_password;
/// assert!(validate_password("StrongPass1!"));
/// assert!(!validate_password("NoSpecial123"));
/// ```
pub fn validate_password(candidate: &str) -> bool {
    let strong = has_minimum_length(candidate)
        && has_uppercase_letter(candidate)
        && has_lowercase_letter(candidate)
        && has_digit(candidate)
        && has_special_character(candidate);
    tracing::trace!(len = candidate.len(), strong, "password checked");
    strong
}

/// Evaluates every rule and reports the ones that failed
pub fn check_password(candidate: &str) -> PasswordReport {
    let failed: Vec<PasswordRule> = PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(candidate))
        .collect();

    if !failed.is_empty() {
        tracing::debug!(
            len = candidate.len(),
            failed = ?failed,
            "password failed strength rules"
        );
    }

    PasswordReport { failed }
}

/// Like [`check_password`], but as a `Result` for `?`-style callers
pub fn ensure_password(candidate: &str) -> Result<(), ValidationError> {
    let report = check_password(candidate);
    if report.is_strong() {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword {
            failed: report.into_failures(),
        })
    }
}

/// 8+ bytes; multi-byte characters count once per byte
fn has_minimum_length(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase_letter(password: &str) -> bool {
    password.bytes().any(|b| b.is_ascii_uppercase())
}

fn has_lowercase_letter(password: &str) -> bool {
    password.bytes().any(|b| b.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.bytes().any(|b| b.is_ascii_digit())
}

/// Any character outside the ASCII word class `[A-Za-z0-9_]`
fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

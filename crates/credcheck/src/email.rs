//! Email format validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Anchored email shape:
/// a leading ASCII letter, then `[a-zA-Z0-9._%+-]*`, a single `@`,
/// a domain of `[a-zA-Z0-9.-]+`, and a final `.` followed by 2+ ASCII letters.
///
/// `$` in the regex crate only matches at the very end of the haystack, so a
/// trailing newline is rejected.
const EMAIL_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9._%+-]*@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validates email format
///
/// Returns `true` iff the whole candidate matches the email shape. Unicode
/// letters are rejected in both the local part and the domain.
///
/// # Examples
/// ```
/// use credcheck::validate_email;
/// assert!(validate_email("test@example.com"));
/// assert!(validate_email("a@b.co.uk"));
/// assert!(!validate_email("1test@example.com"));
/// ```
pub fn validate_email(candidate: &str) -> bool {
    let valid = EMAIL_REGEX.is_match(candidate);
    tracing::trace!(len = candidate.len(), valid, "email checked");
    valid
}

/// Like [`validate_email`], but as a `Result` for `?`-style callers
pub fn ensure_email(candidate: &str) -> Result<(), ValidationError> {
    if validate_email(candidate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

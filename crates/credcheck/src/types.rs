//! Validated newtypes
//!
//! Values of these types have already passed the corresponding check, so
//! code that receives one does not need to re-validate it.
//!
//! - `EmailAddress` - passes [`validate_email`]
//! - `StrongPassword` - passes [`validate_password`]

use nutype::nutype;

use crate::email::validate_email;
use crate::password::validate_password;

/// Email address with a valid shape
///
/// Deserializing an invalid address fails.
///
/// # Example
///
/// ```rust
/// use credcheck::EmailAddress;
///
/// let email = EmailAddress::try_new("test@example.com".to_string()).unwrap();
/// assert_eq!(email.to_string(), "test@example.com");
/// assert!(EmailAddress::try_new("@example.com".to_string()).is_err());
/// ```
#[nutype(
    validate(predicate = validate_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Password that satisfies all five strength rules
///
/// No `Debug`, `Display` or `Serialize`: the value never reaches logs or
/// responses.
#[nutype(
    validate(predicate = validate_password),
    derive(Clone, PartialEq, Eq, AsRef, TryFrom)
)]
pub struct StrongPassword(String);

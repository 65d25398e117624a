//! credcheck
//!
//! Email format and password strength validation.
//!
//! The two canonical checks, [`validate_email`] and [`validate_password`], are
//! pure functions over any `&str`: they never panic and only ever answer
//! `true` or `false`. Everything else in the crate (the per-rule report, the
//! [`Credentials`] value object, the validated newtypes) is built on top of
//! them.

pub mod credentials;
pub mod email;
pub mod error;
pub mod password;
pub mod types;
pub mod validator;

// Re-export the public surface
pub use credentials::Credentials;
pub use email::{ensure_email, validate_email};
pub use error::ValidationError;
pub use password::{check_password, ensure_password, validate_password, PasswordReport, PasswordRule};
pub use types::{EmailAddress, StrongPassword};
pub use validator::Validator;

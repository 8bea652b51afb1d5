//! The leaf-rule contract
//!
//! Implement [`ValidatorType`] to define a reusable rule, then call
//! [`validator`](ValidatorType::validator) to turn it into a composable
//! [`Validator`].
//!
//! # Example
//!
//! ```rust
//! use validations::{ValidatorType, ValidationError, Validator};
//!
//! struct Lowercase;
//!
//! impl ValidatorType for Lowercase {
//!     type Value = str;
//!     type Error = ValidationError;
//!
//!     fn readable(&self) -> String {
//!         "lowercase".to_string()
//!     }
//!
//!     fn validate(&self, value: &str) -> Result<(), ValidationError> {
//!         if value.chars().any(char::is_uppercase) {
//!             Err(ValidationError::new("contains uppercase characters"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! let v: Validator<str> = Lowercase.validator();
//! assert!(v.is_valid("abc"));
//! assert_eq!((!v).readable(), "not lowercase");
//! ```

use crate::error::ValidationError;
use crate::validator::Validator;

/// A rule that can check a value and describe what "valid" means.
///
/// `validate` may fail with any error convertible into a
/// [`ValidationError`]. Foreign errors end up as a leaf error whose message
/// is their description; use `Box<dyn Error + Send + Sync>` as `Error` to
/// return arbitrary ones.
///
/// Implementations must not hide shared mutable state: a rule is checked
/// concurrently from many threads once it is wrapped in a [`Validator`].
pub trait ValidatorType {
    /// The validated type.
    type Value: ?Sized;

    /// What `validate` fails with.
    type Error: Into<ValidationError>;

    /// Readable name, suitable after both "is" and "is not".
    fn readable(&self) -> String;

    /// Check the value.
    fn validate(&self, value: &Self::Value) -> Result<(), Self::Error>;

    /// Wrap this rule in a composable [`Validator`].
    fn validator(self) -> Validator<Self::Value>
    where
        Self: Sized + Send + Sync + 'static,
        Self::Value: 'static,
    {
        Validator::from_validator_type(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct EncodingError;

    impl fmt::Display for EncodingError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "could not be decoded as UTF-8")
        }
    }

    impl Error for EncodingError {}

    struct Utf8;

    impl ValidatorType for Utf8 {
        type Value = [u8];
        type Error = Box<dyn Error + Send + Sync>;

        fn readable(&self) -> String {
            "UTF-8".to_string()
        }

        fn validate(&self, value: &[u8]) -> Result<(), Self::Error> {
            std::str::from_utf8(value).map_err(|_| EncodingError)?;
            Ok(())
        }
    }

    #[test]
    fn test_foreign_error_becomes_message() {
        let v = Utf8.validator();
        let err = v.validate(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.message(), "could not be decoded as UTF-8");
        assert!(err.path().is_empty());
    }

    #[test]
    fn test_readable_carried_over() {
        let v = Utf8.validator();
        assert_eq!(v.readable(), "UTF-8");
        assert!(v.is_valid(b"hello"));
    }

    #[test]
    fn test_composes_with_negation() {
        let v = !Utf8.validator();
        assert_eq!(v.validate(b"ok").unwrap_err().message(), "is UTF-8");
    }
}

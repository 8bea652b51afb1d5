//! Presence rules for optional values

use std::fmt;
use std::marker::PhantomData;

use crate::error::ValidationError;
use crate::validator::Validator;
use crate::validator_type::ValidatorType;

/// Passes when the value is `None`.
pub struct Nil<T>(PhantomData<fn(&T)>);

impl<T> fmt::Debug for Nil<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nil<{}>", std::any::type_name::<T>())
    }
}

impl<T> ValidatorType for Nil<T> {
    type Value = Option<T>;
    type Error = ValidationError;

    fn readable(&self) -> String {
        "nil".to_string()
    }

    fn validate(&self, value: &Option<T>) -> Result<(), ValidationError> {
        match value {
            None => Ok(()),
            Some(_) => Err(ValidationError::new("is not nil")),
        }
    }
}

/// Passes when the value is `None`. Negate it to require a value.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let required: Validator<Option<u8>> = !validators::nil();
/// assert!(required.is_valid(&Some(1)));
/// assert_eq!(required.validate(&None).unwrap_err().reason(), "data is nil");
/// ```
pub fn nil<T: 'static>() -> Validator<Option<T>> {
    Nil::<T>(PhantomData).validator()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil() {
        let v: Validator<Option<String>> = nil();
        assert!(v.is_valid(&None));
        assert_eq!(
            v.validate(&Some("x".to_string())).unwrap_err().message(),
            "is not nil"
        );
    }

    #[test]
    fn test_not_nil_and_not_empty() {
        let v: Validator<Option<String>> = !nil() & (!crate::validators::empty()).when_present();
        assert_eq!(v.readable(), "not nil and not empty");
        assert_eq!(v.validate(&None).unwrap_err().message(), "is nil");
        assert_eq!(
            v.validate(&Some(String::new())).unwrap_err().message(),
            "is empty"
        );
        assert!(v.is_valid(&Some("set".to_string())));
    }
}

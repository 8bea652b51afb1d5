//! Character-set rules for strings

use std::fmt;
use std::marker::PhantomData;

use crate::error::ValidationError;
use crate::validator::Validator;
use crate::validator_type::ValidatorType;

/// Passes when every character belongs to a set.
pub struct CharacterSet<T: ?Sized> {
    name: &'static str,
    allowed: &'static str,
    contains: fn(char) -> bool,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized> CharacterSet<T> {
    /// A set called `name`, described to users as `allowed`, with membership
    /// decided by `contains`.
    pub fn new(name: &'static str, allowed: &'static str, contains: fn(char) -> bool) -> Self {
        CharacterSet {
            name,
            allowed,
            contains,
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for CharacterSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterSet")
            .field("name", &self.name)
            .field("allowed", &self.allowed)
            .finish()
    }
}

impl<T: AsRef<str> + ?Sized> ValidatorType for CharacterSet<T> {
    type Value = T;
    type Error = ValidationError;

    fn readable(&self) -> String {
        self.name.to_string()
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match value.as_ref().chars().find(|c| !(self.contains)(*c)) {
            Some(invalid) => Err(ValidationError::new(format!(
                "contains an invalid character: '{}' (allowed: {})",
                invalid, self.allowed
            ))),
            None => Ok(()),
        }
    }
}

/// Passes when the string only contains ASCII letters and digits.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let v: Validator<str> = validators::alphanumeric();
/// assert!(v.is_valid("abc123"));
/// assert_eq!(
///     v.validate("foo-bar").unwrap_err().message(),
///     "contains an invalid character: '-' (allowed: A-Z, a-z, 0-9)"
/// );
/// ```
pub fn alphanumeric<T: AsRef<str> + ?Sized + 'static>() -> Validator<T> {
    CharacterSet::<T>::new("alphanumeric", "A-Z, a-z, 0-9", |c| {
        c.is_ascii_alphanumeric()
    })
    .validator()
}

/// Passes when the string only contains ASCII characters.
pub fn ascii<T: AsRef<str> + ?Sized + 'static>() -> Validator<T> {
    CharacterSet::<T>::new("ASCII", "ASCII", |c| c.is_ascii()).validator()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_accepts_empty() {
        let v: Validator<String> = alphanumeric();
        assert!(v.is_valid(&String::new()));
    }

    #[test]
    fn test_alphanumeric_reports_first_offender() {
        let v: Validator<str> = alphanumeric();
        assert_eq!(
            v.validate("a b-c").unwrap_err().message(),
            "contains an invalid character: ' ' (allowed: A-Z, a-z, 0-9)"
        );
    }

    #[test]
    fn test_ascii() {
        let v: Validator<str> = ascii();
        assert!(v.is_valid("plain text!"));
        assert_eq!(
            v.validate("café").unwrap_err().message(),
            "contains an invalid character: 'é' (allowed: ASCII)"
        );
        assert_eq!(v.readable(), "ASCII");
    }

    #[test]
    fn test_negated_readable() {
        let v: Validator<str> = !alphanumeric();
        assert_eq!(v.readable(), "not alphanumeric");
        assert_eq!(v.validate("abc").unwrap_err().message(), "is alphanumeric");
    }
}

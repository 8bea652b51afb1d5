//! A value that re-validates itself on every update
//!
//! [`Validated<T>`] holds a current value, the validator for it, the latest
//! outcome and a fallback. Reading through [`get`](Validated::get) always
//! succeeds: it returns the current value when it is valid and the fallback
//! otherwise. The current value is kept either way and can be read back with
//! [`raw`](Validated::raw).
//!
//! # Example
//!
//! ```rust
//! use validations::{validators, Validated};
//!
//! let mut three = Validated::new(
//!     String::new(),
//!     "foo-bar".to_string(),
//!     !validators::empty() & validators::count(1..5),
//! );
//!
//! assert!(!three.is_valid());
//! assert_eq!(three.get(), "foo-bar");
//! assert_eq!(
//!     three.error().map(|e| e.reason()).as_deref(),
//!     Some("data is empty and is less than required minimum of 1 character")
//! );
//!
//! three.set("foo".to_string());
//! assert!(three.is_valid());
//! assert_eq!(three.get(), "foo");
//!
//! three.set("not empty".to_string());
//! assert!(!three.is_valid());
//! assert_eq!(three.raw(), "not empty");
//! ```

use std::fmt;

use crate::error::ValidationError;
use crate::validatable::Validatable;
use crate::validator::Validator;

/// A value paired with its validator and the cached result of the last check.
pub struct Validated<T> {
    current: T,
    default: T,
    validator: Validator<T>,
    error: Option<ValidationError>,
}

impl<T: 'static> Validated<T> {
    /// Hold `value`, falling back to `default` while it is invalid.
    pub fn new(value: T, default: T, validator: Validator<T>) -> Self {
        let error = validator.validate(&value).err();
        Validated {
            current: value,
            default,
            validator,
            error,
        }
    }

    /// Replace the value and re-validate.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.revalidate();
    }

    /// Mutate the value in place, then re-validate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validated};
    ///
    /// let mut tags = Validated::new(vec!["a"], vec![], validators::count(..=2));
    /// tags.modify(|t| t.extend(["b", "c"]));
    /// assert!(!tags.is_valid());
    /// assert!(tags.get().is_empty());
    /// ```
    pub fn modify<F: FnOnce(&mut T)>(&mut self, f: F) {
        f(&mut self.current);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.error = self.validator.validate(&self.current).err();
        #[cfg(feature = "tracing")]
        if let Some(ref error) = self.error {
            tracing::debug!(
                readable = %self.validator.readable(),
                reason = %error,
                "held value rejected, falling back to default"
            );
        }
    }

    /// The current value when valid, the fallback otherwise.
    pub fn get(&self) -> &T {
        match self.error {
            None => &self.current,
            Some(_) => &self.default,
        }
    }

    /// The current value, valid or not.
    pub fn raw(&self) -> &T {
        &self.current
    }

    /// The fallback returned while the value is invalid.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Whether the current value passed the last check.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The error from the last check, if it failed.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// The validator applied on every update.
    pub fn validator(&self) -> &Validator<T> {
        &self.validator
    }

    /// The current value if valid, or the cached error.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self.error {
            None => Ok(self.current),
            Some(error) => Err(error),
        }
    }
}

impl<U: 'static> Validated<Option<U>> {
    /// Hold an optional value whose fallback is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validated};
    ///
    /// let mut two = Validated::optional(
    ///     None,
    ///     !validators::nil() & (!validators::empty()).when_present(),
    /// );
    /// assert!(!two.is_valid());
    ///
    /// two.set(Some("not empty".to_string()));
    /// assert_eq!(two.get().as_deref(), Some("not empty"));
    ///
    /// two.set(Some(String::new()));
    /// assert_eq!(two.get(), &None);
    /// ```
    pub fn optional(value: Option<U>, validator: Validator<Option<U>>) -> Self {
        Validated::new(value, None, validator)
    }
}

impl<T: Validatable + 'static> Validated<T> {
    /// Hold a self-validating value.
    pub fn validatable(value: T, default: T) -> Self {
        Validated::new(value, default, Validator::valid())
    }
}

impl<T: fmt::Debug> fmt::Debug for Validated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("current", &self.current)
            .field("default", &self.default)
            .field("validator", &self.validator)
            .field("error", &self.error)
            .finish()
    }
}

impl<T: Clone> Clone for Validated<T> {
    fn clone(&self) -> Self {
        Validated {
            current: self.current.clone(),
            default: self.default.clone(),
            validator: self.validator.clone(),
            error: self.error.clone(),
        }
    }
}

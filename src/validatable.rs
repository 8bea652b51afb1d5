//! Self-validating values and nested delegation
//!
//! A type implements [`Validatable`] to check its own invariants. Composite
//! types validate each field and prefix the field name onto failures, so
//! errors from deep inside an object graph come out with a dotted path.
//!
//! # Example
//!
//! ```rust
//! use validations::{validate_field, validators, Validatable, ValidationOutcome, Validator};
//!
//! struct Pet {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Validatable for Pet {
//!     fn validate(&self) -> ValidationOutcome {
//!         validate_field("name", &self.name, &!validators::empty())?;
//!         validate_field("age", &self.age, &validators::range(0..=40))
//!     }
//! }
//!
//! struct Owner {
//!     pet: Pet,
//! }
//!
//! impl Validatable for Owner {
//!     fn validate(&self) -> ValidationOutcome {
//!         validate_field("pet", &self.pet, &Validator::valid())
//!     }
//! }
//!
//! let owner = Owner { pet: Pet { name: String::new(), age: 3 } };
//! let err = owner.validate().unwrap_err();
//! assert_eq!(err.path(), &["pet", "name"]);
//! assert_eq!(err.reason(), "pet.name is empty");
//! ```

use crate::error::{ResultPathExt, ValidationOutcome};
use crate::validator::Validator;

/// A value that knows how to validate itself.
pub trait Validatable {
    /// Check this value's invariants.
    fn validate(&self) -> ValidationOutcome;
}

/// Run `validator` on one field and prefix `name` onto any error path.
pub fn validate_field<T>(name: &str, value: &T, validator: &Validator<T>) -> ValidationOutcome
where
    T: ?Sized + 'static,
{
    validator.validate(value).at_field(name)
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self) -> ValidationOutcome {
        (**self).validate()
    }
}

/// `None` has nothing to check.
impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ValidationOutcome {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

/// Elements are checked in order; the first failure is reported under its
/// index.
impl<T: Validatable> Validatable for [T] {
    fn validate(&self) -> ValidationOutcome {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| item.validate().at_field(index.to_string()))
    }
}

impl<T: Validatable> Validatable for Vec<T> {
    fn validate(&self) -> ValidationOutcome {
        self.as_slice().validate()
    }
}

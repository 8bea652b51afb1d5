//! Testing utilities for validation rules
//!
//! Assertion macros that print the failure reason instead of a bare
//! `Result` debug dump, and (with the `proptest` feature) an [`Arbitrary`]
//! implementation for [`ValidationError`](crate::ValidationError).
//!
//! # Examples
//!
//! ```rust
//! use validations::{assert_invalid, assert_invalid_reason, assert_valid, validators, Validator};
//!
//! let v: Validator<str> = !validators::empty();
//!
//! assert_valid!(v.validate("coco"));
//! assert_invalid!(v.validate(""));
//! assert_invalid_reason!(v.validate(""), "data is empty");
//! ```
//!
//! [`Arbitrary`]: https://docs.rs/proptest/latest/proptest/arbitrary/trait.Arbitrary.html

/// Assert that a validation outcome is `Ok`.
///
/// Panics with the failure reason otherwise.
///
/// # Example
///
/// ```rust
/// use validations::{assert_valid, validators, Validator};
///
/// let v: Validator<u8> = validators::range(1..);
/// assert_valid!(v.validate(&3));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected valid, got invalid: {}", e);
            }
        }
    };
}

/// Assert that a validation outcome is `Err`.
///
/// # Example
///
/// ```rust
/// use validations::{assert_invalid, validators, Validator};
///
/// let v: Validator<u8> = validators::range(1..);
/// assert_invalid!(v.validate(&0));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        match $outcome {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(v) => {
                panic!("Expected invalid, got valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validation outcome failed with a specific reason.
///
/// The reason is compared in its rendered form (`"<path> <message>"` or
/// `"data <message>"`).
///
/// # Example
///
/// ```rust
/// use validations::{assert_invalid_reason, validators, Validator};
///
/// let v: Validator<Option<u8>> = !validators::nil();
/// assert_invalid_reason!(v.validate(&None), "data is nil");
/// ```
#[macro_export]
macro_rules! assert_invalid_reason {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            ::core::result::Result::Err(e) => {
                assert_eq!($crate::ValidationError::reason(&e), $expected);
            }
            ::core::result::Result::Ok(v) => {
                panic!(
                    "Expected invalid with reason {:?}, got valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::ValidationError;

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            "is [a-z ]{1,24}",
            proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 0..4),
        )
            .prop_map(|(message, path)| ValidationError::new(message).with_path(path))
            .boxed()
    }
}

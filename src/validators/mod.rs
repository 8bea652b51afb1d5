//! Built-in leaf validators
//!
//! Each rule is a [`ValidatorType`](crate::ValidatorType) struct with a
//! constructor function that returns a ready-to-compose
//! [`Validator`](crate::Validator). Combine them with `&`, `|` and `!`.
//!
//! | constructor | readable | fails with |
//! |---|---|---|
//! | [`empty`] | `empty` | `is not empty` |
//! | [`count`] | `at least 1 character` | `is less than required minimum of 1 character` |
//! | [`nil`] | `nil` | `is not nil` |
//! | [`alphanumeric`] | `alphanumeric` | `contains an invalid character: '-' (allowed: A-Z, a-z, 0-9)` |
//! | [`ascii`] | `ASCII` | `contains an invalid character: 'é' (allowed: ASCII)` |
//! | [`range`] | `between 1 and 10` | `is less than 1` |
//! | [`one_of`] | `in [red, green]` | `is not in [red, green]` |
//! | [`valid`] | `validatable` | whatever the value reports |
//!
//! # Example
//!
//! ```rust
//! use validations::{validators, Validator};
//!
//! let name: Validator<Option<String>> =
//!     !validators::nil() & (!validators::empty()).when_present();
//!
//! assert!(name.is_valid(&Some("coco".to_string())));
//! assert_eq!(name.validate(&None).unwrap_err().reason(), "data is nil");
//! assert_eq!(
//!     name.validate(&Some(String::new())).unwrap_err().reason(),
//!     "data is empty"
//! );
//! ```

mod collection;
mod number;
mod option;
mod string;

pub use collection::{count, empty, Count, Countable, Empty};
pub use number::{one_of, range, OneOf, Range};
pub use option::{nil, Nil};
pub use string::{alphanumeric, ascii, CharacterSet};

use crate::validatable::Validatable;
use crate::validator::Validator;

/// Delegate to the value's own validation. Same as [`Validator::valid`].
pub fn valid<T: Validatable + ?Sized + 'static>() -> Validator<T> {
    Validator::valid()
}

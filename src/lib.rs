//! # Validations
//!
//! Composable, self-describing validation rules.
//!
//! A [`Validator<T>`] pairs a human-readable description with a check
//! function. Validators compose with `&` (and), `|` (or) and `!` (not), and
//! the composite keeps a readable description built from its parts:
//!
//! ```rust
//! use validations::{validators, Validator};
//!
//! let username: Validator<String> =
//!     !validators::empty() & validators::alphanumeric() & validators::count(3..=16);
//!
//! assert_eq!(
//!     username.readable(),
//!     "not empty and alphanumeric and between 3 and 16 characters"
//! );
//! assert!(username.is_valid(&"coco".to_string()));
//!
//! let err = username.validate(&"c-c".to_string()).unwrap_err();
//! assert_eq!(
//!     err.reason(),
//!     "data contains an invalid character: '-' (allowed: A-Z, a-z, 0-9)"
//! );
//! ```
//!
//! ## Nested values
//!
//! Types implement [`Validatable`] to check themselves. Failures from nested
//! fields carry a key path, so the reason says where the problem is:
//!
//! ```rust
//! use validations::{validate_field, validators, Validatable, ValidationOutcome, Validator};
//!
//! struct Pet {
//!     name: String,
//! }
//!
//! impl Validatable for Pet {
//!     fn validate(&self) -> ValidationOutcome {
//!         validate_field("name", &self.name, &!validators::empty())
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
//! let owner = Owner { pet: Pet { name: String::new() } };
//! assert_eq!(owner.validate().unwrap_err().reason(), "pet.name is empty");
//! ```
//!
//! ## Holding values
//!
//! [`Validated<T>`] re-checks its value on every update and falls back to a
//! default while the value is invalid. [`StreamValidateExt`] and
//! [`IteratorValidateExt`] validate every item flowing through a sequence.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod semigroup;
pub mod stream;
pub mod testing;
pub mod validatable;
pub mod validated;
pub mod validator;
pub mod validator_type;
pub mod validators;

// Re-exports
pub use error::{ResultPathExt, ValidationError, ValidationOutcome};
pub use semigroup::Semigroup;
pub use stream::{IteratorValidateExt, StreamValidateExt};
pub use validatable::{validate_field, Validatable};
pub use validated::Validated;
pub use validator::Validator;
pub use validator_type::ValidatorType;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ResultPathExt, ValidationError, ValidationOutcome};
    pub use crate::semigroup::Semigroup;
    pub use crate::stream::{IteratorValidateExt, StreamValidateExt};
    pub use crate::validatable::{validate_field, Validatable};
    pub use crate::validated::Validated;
    pub use crate::validator::Validator;
    pub use crate::validator_type::ValidatorType;
    pub use crate::validators;
}

//! Semigroup trait for merging failures
//!
//! A Semigroup is a type with an associative binary operation. Validation uses
//! it to merge the two failures of a conjunction into one explanation rather
//! than keeping only the first.
//!
//! # Mathematical Properties
//!
//! The `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use validations::{Semigroup, ValidationError};
//!
//! let err = ValidationError::new("is empty")
//!     .combine(ValidationError::new("is not alphanumeric"));
//! assert_eq!(err.reason(), "data is empty and is not alphanumeric");
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

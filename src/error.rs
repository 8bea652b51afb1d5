//! Path-qualified validation errors
//!
//! This module provides [`ValidationError`], the single error kind produced by
//! validation. An error carries a leaf-level message (what failed) and a key
//! path (where, inside a nested structure). Paths are built outside-in: each
//! enclosing aggregate prepends its field name as the error propagates, so the
//! finished path reads root-to-leaf.
//!
//! # Examples
//!
//! ```
//! use validations::ValidationError;
//!
//! let err = ValidationError::new("is empty").at("name").at("pet");
//!
//! assert_eq!(err.path(), &["pet", "name"]);
//! assert_eq!(err.reason(), "pet.name is empty");
//!
//! let err = ValidationError::new("is empty");
//! assert_eq!(err.reason(), "data is empty");
//! ```

use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use crate::Semigroup;

/// The outcome of running a validator: `Ok(())` when valid.
pub type ValidationOutcome = Result<(), ValidationError>;

/// A validation failure with a message and the key path to the invalid data.
///
/// The `message` reads naturally after the thing it describes ("is empty",
/// "is less than required minimum of 1 character"). The rendered
/// [`reason`](ValidationError::reason) puts the dotted path, or `data` when the
/// path is empty, in front of it.
///
/// # Examples
///
/// ```
/// use validations::ValidationError;
///
/// let err = ValidationError::new("is not nil").with_path(["owner", "email"]);
/// assert_eq!(err.to_string(), "owner.email is not nil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    message: String,
    path: Vec<String>,
}

impl ValidationError {
    /// Create an error at the leaf (empty path).
    ///
    /// # Examples
    ///
    /// ```
    /// use validations::ValidationError;
    ///
    /// let err = ValidationError::new("is empty");
    /// assert_eq!(err.message(), "is empty");
    /// assert!(err.path().is_empty());
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Convert any foreign error into a validation error.
    ///
    /// If `error` is itself a `ValidationError` it is cloned as-is, keeping
    /// its path. Otherwise the message is the error's `Display` text.
    ///
    /// # Examples
    ///
    /// ```
    /// use validations::ValidationError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
    /// let err = ValidationError::from_error(&io);
    /// assert_eq!(err.message(), "stream did not contain valid UTF-8");
    /// ```
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        match error.downcast_ref::<ValidationError>() {
            Some(validation) => validation.clone(),
            None => ValidationError::new(error.to_string()),
        }
    }

    /// Replace the path.
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Prepend one key segment to the path.
    ///
    /// Enclosing aggregates call this while the error travels outward, so
    /// the outermost segment ends up first.
    ///
    /// # Examples
    ///
    /// ```
    /// use validations::ValidationError;
    ///
    /// let err = ValidationError::new("is empty").at("name").at("owner");
    /// assert_eq!(err.path(), &["owner", "name"]);
    /// ```
    pub fn at(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Same as [`at`](ValidationError::at).
    pub fn prefix_path(self, segment: impl Into<String>) -> Self {
        self.at(segment)
    }

    /// The leaf-level explanation.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Key segments from the validation root to the offending field.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The path joined with `.`, or `None` at the root.
    pub fn path_string(&self) -> Option<String> {
        if self.path.is_empty() {
            None
        } else {
            Some(self.path.join("."))
        }
    }

    /// Stable identifier shared by every validation failure.
    pub fn identifier(&self) -> &'static str {
        "validationFailed"
    }

    /// Human-readable reason: `"<dotted.path> <message>"`, or
    /// `"data <message>"` when the path is empty.
    pub fn reason(&self) -> String {
        match self.path_string() {
            Some(path) => format!("{} {}", path, self.message),
            None => format!("data {}", self.message),
        }
    }

    /// Replace the message, keeping the path.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Merge two failures where both had to hold ("... and ...").
    ///
    /// The result is a fresh leaf error. Each side contributes its message,
    /// or its full reason when it carries a path.
    pub fn both(left: ValidationError, right: ValidationError) -> Self {
        ValidationError::new(format!("{} and {}", left.part(), right.part()))
    }

    /// Merge two failures where either would have sufficed ("... or ...").
    pub fn either(left: ValidationError, right: ValidationError) -> Self {
        ValidationError::new(format!("{} or {}", left.part(), right.part()))
    }

    fn part(&self) -> String {
        if self.path.is_empty() {
            self.message.clone()
        } else {
            self.reason()
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path_string() {
            Some(path) => write!(f, "{} {}", path, self.message),
            None => write!(f, "data {}", self.message),
        }
    }
}

impl StdError for ValidationError {}

/// Conjunction: combining two errors reads as "both were wrong".
impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError::both(self, other)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::new(message)
    }
}

impl From<Box<dyn StdError + Send + Sync>> for ValidationError {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<ValidationError>() {
            Ok(validation) => *validation,
            Err(other) => ValidationError::new(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ValidationError {
    fn from(error: std::io::Error) -> Self {
        ValidationError::new(error.to_string())
    }
}

impl From<Infallible> for ValidationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Path helpers on a [`ValidationOutcome`].
pub trait ResultPathExt {
    /// Prepend `segment` to the error path, if this is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use validations::{ResultPathExt, ValidationError, ValidationOutcome};
    ///
    /// let outcome: ValidationOutcome = Err(ValidationError::new("is empty"));
    /// let err = outcome.at_field("name").unwrap_err();
    /// assert_eq!(err.reason(), "name is empty");
    /// ```
    fn at_field(self, segment: impl Into<String>) -> Self;
}

impl<T> ResultPathExt for Result<T, ValidationError> {
    fn at_field(self, segment: impl Into<String>) -> Self {
        self.map_err(|e| e.at(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_without_path() {
        let err = ValidationError::new("is empty");
        assert_eq!(err.reason(), "data is empty");
        assert_eq!(err.to_string(), "data is empty");
    }

    #[test]
    fn test_reason_with_path() {
        let err = ValidationError::new("is empty").with_path(["pet", "name"]);
        assert_eq!(err.reason(), "pet.name is empty");
        assert_eq!(err.path_string().as_deref(), Some("pet.name"));
    }

    #[test]
    fn test_prefix_path_prepends() {
        let err = ValidationError::new("is empty")
            .at("name")
            .prefix_path("pet")
            .at("owner");
        assert_eq!(err.path(), &["owner", "pet", "name"]);
    }

    #[test]
    fn test_both_uses_messages_at_leaf() {
        let err = ValidationError::both(
            ValidationError::new("is empty"),
            ValidationError::new("is less than required minimum of 1 character"),
        );
        assert_eq!(
            err.reason(),
            "data is empty and is less than required minimum of 1 character"
        );
        assert!(err.path().is_empty());
    }

    #[test]
    fn test_either_keeps_nested_location() {
        let err = ValidationError::either(
            ValidationError::new("is empty").at("name"),
            ValidationError::new("is nil"),
        );
        assert_eq!(err.message(), "name is empty or is nil");
    }

    #[test]
    fn test_combine_is_associative() {
        let a = || ValidationError::new("a");
        let b = || ValidationError::new("b");
        let c = || ValidationError::new("c");

        assert_eq!(
            a().combine(b()).combine(c()),
            a().combine(b().combine(c()))
        );
    }

    #[test]
    fn test_from_boxed_foreign_error() {
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(std::io::Error::new(std::io::ErrorKind::Other, "bad encoding"));
        let err = ValidationError::from(boxed);
        assert_eq!(err.message(), "bad encoding");
        assert!(err.path().is_empty());
    }

    #[test]
    fn test_from_boxed_validation_error_keeps_path() {
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(ValidationError::new("is empty").at("name"));
        let err = ValidationError::from(boxed);
        assert_eq!(err.path(), &["name"]);
    }

    #[test]
    fn test_from_error_downcasts() {
        let original = ValidationError::new("is nil").at("owner");
        let err = ValidationError::from_error(&original);
        assert_eq!(err, original);
    }

    #[test]
    fn test_at_field_on_ok_is_noop() {
        let outcome: ValidationOutcome = Ok(());
        assert_eq!(outcome.at_field("name"), Ok(()));
    }

    #[test]
    fn test_identifier() {
        assert_eq!(ValidationError::new("x").identifier(), "validationFailed");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let err = ValidationError::new("is empty").at("name");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"is empty","path":["name"]}"#);

        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}

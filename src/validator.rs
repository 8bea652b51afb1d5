//! The composable validator type and its logical combinators
//!
//! A [`Validator<T>`] pairs a readable description with a checking function.
//! The readable completes the phrases "is ___" and "is not ___" ("empty",
//! "alphanumeric"), which lets the combinators build grammatical messages for
//! composite failures.
//!
//! Validators combine with:
//! - [`and`](Validator::and) (`&`): both must hold; when both fail, both
//!   explanations are reported
//! - [`or`](Validator::or) (`|`): either must hold
//! - [`negate`](Validator::negate) (`!`): must not hold
//!
//! # Example
//!
//! ```rust
//! use validations::{validators, Validator};
//!
//! let username: Validator<String> = !validators::empty() & validators::count(1..);
//!
//! assert!(username.validate(&"abc".to_string()).is_ok());
//!
//! let err = username.validate(&String::new()).unwrap_err();
//! assert_eq!(
//!     err.reason(),
//!     "data is empty and is less than required minimum of 1 character"
//! );
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use crate::error::{ValidationError, ValidationOutcome};
use crate::validatable::Validatable;
use crate::validator_type::ValidatorType;
use crate::Semigroup;

type CheckFn<T> = dyn Fn(&T) -> ValidationOutcome + Send + Sync;

/// How a validator was built. Only negation reads this, to keep readables
/// grammatical.
enum Shape<T: ?Sized> {
    Leaf,
    Compound,
    Negation(Box<Validator<T>>),
}

impl<T: ?Sized> Clone for Shape<T> {
    fn clone(&self) -> Self {
        match self {
            Shape::Leaf => Shape::Leaf,
            Shape::Compound => Shape::Compound,
            Shape::Negation(inner) => Shape::Negation(inner.clone()),
        }
    }
}

/// A composable rule over values of type `T`.
///
/// Validators are immutable and stateless. Cloning one is an `Arc` bump, and
/// a single instance can be used from many threads at once.
///
/// # Example
///
/// ```rust
/// use validations::{Validator, ValidationError};
///
/// let even = Validator::new("even", |n: &i32| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::new("is odd"))
///     }
/// });
///
/// assert!(even.is_valid(&4));
/// assert_eq!(even.validate(&3).unwrap_err().reason(), "data is odd");
/// assert_eq!((!even).readable(), "not even");
/// ```
pub struct Validator<T: ?Sized> {
    readable: String,
    check: Arc<CheckFn<T>>,
    shape: Shape<T>,
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Validator {
            readable: self.readable.clone(),
            check: Arc::clone(&self.check),
            shape: self.shape.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("readable", &self.readable)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.readable)
    }
}

impl<T: ?Sized + 'static> Validator<T> {
    /// Create a validator from a readable description and a checking function.
    ///
    /// `readable` must read naturally after both "is" and "is not".
    pub fn new<F>(readable: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> ValidationOutcome + Send + Sync + 'static,
    {
        Validator {
            readable: readable.into(),
            check: Arc::new(check),
            shape: Shape::Leaf,
        }
    }

    /// Adapt a leaf rule into a composable validator.
    pub fn from_validator_type<V>(rule: V) -> Self
    where
        V: ValidatorType<Value = T> + Send + Sync + 'static,
    {
        let readable = rule.readable();
        Validator::new(readable, move |value| rule.validate(value).map_err(Into::into))
    }

    fn compound<F>(readable: String, check: F) -> Self
    where
        F: Fn(&T) -> ValidationOutcome + Send + Sync + 'static,
    {
        Validator {
            readable,
            check: Arc::new(check),
            shape: Shape::Compound,
        }
    }

    /// A rule every value satisfies.
    pub fn always() -> Self {
        Validator::new("valid", |_| Ok(()))
    }

    /// The readable description of this rule.
    pub fn readable(&self) -> &str {
        &self.readable
    }

    /// Check `value` against this rule.
    pub fn validate(&self, value: &T) -> ValidationOutcome {
        let outcome = self.run(value);
        #[cfg(feature = "tracing")]
        if let Err(ref error) = outcome {
            tracing::trace!(readable = %self.readable, reason = %error, "validation failed");
        }
        outcome
    }

    /// Whether `value` satisfies this rule.
    pub fn is_valid(&self, value: &T) -> bool {
        self.run(value).is_ok()
    }

    /// Validate and hand the value back on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let v: Validator<Vec<u8>> = !validators::empty();
    /// assert_eq!(v.result_for(vec![1, 2]), Ok(vec![1, 2]));
    /// assert!(v.result_for(vec![]).is_err());
    /// ```
    pub fn result_for(&self, value: T) -> Result<T, ValidationError>
    where
        T: Sized,
    {
        self.validate(&value).map(|()| value)
    }

    #[inline]
    fn run(&self, value: &T) -> ValidationOutcome {
        (self.check)(value)
    }

    /// Both rules must hold.
    ///
    /// Both sides are always evaluated. If only one fails, its error is
    /// returned unchanged; if both fail, the messages are joined with
    /// `" and "`, left first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let v: Validator<String> = validators::alphanumeric().and(validators::count(3..));
    /// assert_eq!(v.readable(), "alphanumeric and at least 3 characters");
    ///
    /// let err = v.validate(&"a-".to_string()).unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "contains an invalid character: '-' (allowed: A-Z, a-z, 0-9) and is less than required minimum of 3 characters"
    /// );
    /// ```
    pub fn and(self, other: Validator<T>) -> Self {
        let readable = format!("{} and {}", self.readable, other.readable);
        Validator::compound(readable, move |value| {
            match (self.run(value), other.run(value)) {
                (Ok(()), Ok(())) => Ok(()),
                (Err(error), Ok(())) | (Ok(()), Err(error)) => Err(error),
                (Err(left), Err(right)) => Err(left.combine(right)),
            }
        })
    }

    /// Either rule must hold.
    ///
    /// The right side runs only when the left fails. When both fail, the
    /// messages are joined with `" or "`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let v: Validator<String> = validators::empty().or(validators::count(3..));
    /// assert!(v.is_valid(&String::new()));
    /// assert!(v.is_valid(&"abc".to_string()));
    ///
    /// let err = v.validate(&"ab".to_string()).unwrap_err();
    /// assert_eq!(
    ///     err.message(),
    ///     "is not empty or is less than required minimum of 3 characters"
    /// );
    /// ```
    pub fn or(self, other: Validator<T>) -> Self {
        let readable = format!("{} or {}", self.readable, other.readable);
        Validator::compound(readable, move |value| {
            let left = match self.run(value) {
                Ok(()) => return Ok(()),
                Err(error) => error,
            };
            other
                .run(value)
                .map_err(|right| ValidationError::either(left, right))
        })
    }

    /// The rule must not hold.
    ///
    /// Negating a negation gives back the original rule, readable included.
    /// A leaf whose readable already starts with `"not "` loses that prefix
    /// rather than gaining a second one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let not_empty: Validator<String> = validators::empty().negate();
    /// assert_eq!(not_empty.readable(), "not empty");
    /// assert_eq!(not_empty.validate(&String::new()).unwrap_err().message(), "is empty");
    ///
    /// assert_eq!(not_empty.negate().readable(), "empty");
    /// ```
    pub fn negate(self) -> Self {
        let readable = match &self.shape {
            Shape::Negation(inner) => return (**inner).clone(),
            Shape::Compound => format!("not ({})", self.readable),
            Shape::Leaf => match self.readable.strip_prefix("not ") {
                Some(positive) => positive.to_string(),
                None => format!("not {}", self.readable),
            },
        };
        let message = format!("is {}", self.readable);
        let inner = self.clone();

        Validator {
            readable,
            check: Arc::new(move |value: &T| match inner.run(value) {
                Ok(()) => Err(ValidationError::new(message.clone())),
                Err(_) => Ok(()),
            }),
            shape: Shape::Negation(Box::new(self)),
        }
    }

    /// Every rule must hold. An empty set is trivially valid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let none: Validator<str> = Validator::all(Vec::new());
    /// assert!(none.is_valid(""));
    ///
    /// let v: Validator<str> = Validator::all([!validators::empty(), validators::ascii()]);
    /// assert!(v.is_valid("abc"));
    /// assert!(!v.is_valid(""));
    /// ```
    pub fn all<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<T>>,
    {
        validators
            .into_iter()
            .reduce(Validator::and)
            .unwrap_or_else(Validator::always)
    }

    /// At least one rule must hold. An empty set rejects everything.
    pub fn any<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Validator<T>>,
    {
        validators.into_iter().reduce(Validator::or).unwrap_or_else(|| {
            Validator::new("matching some rule", |_| {
                Err(ValidationError::new("matches no rule"))
            })
        })
    }

    /// Replace the readable description.
    pub fn with_readable(self, readable: impl Into<String>) -> Self {
        Validator {
            readable: readable.into(),
            check: self.check,
            shape: Shape::Leaf,
        }
    }

    /// Replace the failure message, keeping any path the rule reported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let v: Validator<String> = validators::count(8..).with_message("is too short for a password");
    /// assert_eq!(
    ///     v.validate(&"hunter2".to_string()).unwrap_err().reason(),
    ///     "data is too short for a password"
    /// );
    /// ```
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        let check = self.check;
        Validator {
            readable: self.readable,
            check: Arc::new(move |value: &T| {
                check(value).map_err(|error| error.with_message(message.clone()))
            }),
            shape: self.shape,
        }
    }

    /// Validate one field of a parent value, prefixing the field name onto
    /// any error path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// struct Pet {
    ///     name: String,
    /// }
    ///
    /// let pet: Validator<Pet> = Validator::field("name", |p: &Pet| &p.name, !validators::empty());
    ///
    /// let err = pet.validate(&Pet { name: String::new() }).unwrap_err();
    /// assert_eq!(err.path(), &["name"]);
    /// assert_eq!(err.reason(), "name is empty");
    /// ```
    pub fn field<U, F>(name: impl Into<String>, accessor: F, validator: Validator<U>) -> Self
    where
        U: ?Sized + 'static,
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        let name = name.into();
        let readable = validator.readable.clone();
        Validator::new(readable, move |parent: &T| {
            validator
                .run(accessor(parent))
                .map_err(|error| error.at(name.clone()))
        })
    }
}

impl<T: 'static> Validator<T> {
    /// Lift this rule to `Option<T>`: `None` passes, `Some` is checked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{validators, Validator};
    ///
    /// let nickname: Validator<Option<String>> = validators::count(2..).when_present();
    /// assert!(nickname.is_valid(&None));
    /// assert!(nickname.is_valid(&Some("jo".to_string())));
    /// assert!(!nickname.is_valid(&Some("j".to_string())));
    /// ```
    pub fn when_present(self) -> Validator<Option<T>> {
        let readable = self.readable.clone();
        Validator::new(readable, move |value: &Option<T>| match value {
            Some(inner) => self.run(inner),
            None => Ok(()),
        })
    }
}

impl<T: Validatable + ?Sized + 'static> Validator<T> {
    /// Delegate to the value's own [`Validatable::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use validations::{Validatable, ValidationError, ValidationOutcome, Validator};
    ///
    /// struct Port(u16);
    ///
    /// impl Validatable for Port {
    ///     fn validate(&self) -> ValidationOutcome {
    ///         if self.0 == 0 {
    ///             Err(ValidationError::new("is zero"))
    ///         } else {
    ///             Ok(())
    ///         }
    ///     }
    /// }
    ///
    /// let v = Validator::<Port>::valid();
    /// assert_eq!(v.readable(), "validatable");
    /// assert!(v.is_valid(&Port(8080)));
    /// assert!(!v.is_valid(&Port(0)));
    /// ```
    pub fn valid() -> Self {
        Validator::new("validatable", |value: &T| value.validate())
    }
}

impl<T: ?Sized + 'static> BitAnd for Validator<T> {
    type Output = Validator<T>;

    fn bitand(self, rhs: Validator<T>) -> Validator<T> {
        self.and(rhs)
    }
}

impl<T: ?Sized + 'static> BitOr for Validator<T> {
    type Output = Validator<T>;

    fn bitor(self, rhs: Validator<T>) -> Validator<T> {
        self.or(rhs)
    }
}

impl<T: ?Sized + 'static> Not for Validator<T> {
    type Output = Validator<T>;

    fn not(self) -> Validator<T> {
        self.negate()
    }
}

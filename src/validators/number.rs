//! Ordering and membership rules

use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::error::ValidationError;
use crate::validator::Validator;
use crate::validator_type::ValidatorType;

/// Passes when the value lies within a range.
#[derive(Clone, Debug)]
pub struct Range<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Clone> Range<T> {
    /// Build from any range expression (`1..`, `0..=100`, `..10`).
    pub fn new<R: RangeBounds<T>>(range: R) -> Self {
        Range {
            start: range.start_bound().cloned(),
            end: range.end_bound().cloned(),
        }
    }
}

impl<T: PartialOrd + fmt::Display> ValidatorType for Range<T> {
    type Value = T;
    type Error = ValidationError;

    fn readable(&self) -> String {
        let lower = match &self.start {
            Bound::Included(min) => Some(format!("at least {}", min)),
            Bound::Excluded(min) => Some(format!("greater than {}", min)),
            Bound::Unbounded => None,
        };
        let upper = match &self.end {
            Bound::Included(max) => Some(format!("at most {}", max)),
            Bound::Excluded(max) => Some(format!("less than {}", max)),
            Bound::Unbounded => None,
        };
        match (&self.start, &self.end, lower, upper) {
            (Bound::Included(min), Bound::Included(max), _, _) => {
                format!("between {} and {}", min, max)
            }
            (_, _, Some(lower), Some(upper)) => format!("{} and {}", lower, upper),
            (_, _, Some(bound), None) | (_, _, None, Some(bound)) => bound,
            (_, _, None, None) => "valid".to_string(),
        }
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match &self.start {
            Bound::Included(min) if value < min => {
                return Err(ValidationError::new(format!("is less than {}", min)));
            }
            Bound::Excluded(min) if value <= min => {
                return Err(ValidationError::new(format!("is not greater than {}", min)));
            }
            _ => {}
        }
        match &self.end {
            Bound::Included(max) if value > max => {
                Err(ValidationError::new(format!("is greater than {}", max)))
            }
            Bound::Excluded(max) if value >= max => {
                Err(ValidationError::new(format!("is not less than {}", max)))
            }
            _ => Ok(()),
        }
    }
}

/// Passes when the value lies within `range`.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let age: Validator<u32> = validators::range(1..=30);
/// assert_eq!(age.readable(), "between 1 and 30");
/// assert!(age.is_valid(&4));
/// assert_eq!(age.validate(&0).unwrap_err().message(), "is less than 1");
/// assert_eq!(age.validate(&31).unwrap_err().message(), "is greater than 30");
/// ```
pub fn range<T, R>(range: R) -> Validator<T>
where
    T: PartialOrd + fmt::Display + Clone + Send + Sync + 'static,
    R: RangeBounds<T>,
{
    Range::<T>::new(range).validator()
}

/// Passes when the value equals one of a fixed list.
#[derive(Clone, Debug)]
pub struct OneOf<T> {
    items: Vec<T>,
}

impl<T> OneOf<T> {
    /// The allowed values.
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        OneOf {
            items: items.into_iter().collect(),
        }
    }
}

impl<T: PartialEq + fmt::Display> ValidatorType for OneOf<T> {
    type Value = T;
    type Error = ValidationError;

    fn readable(&self) -> String {
        let items: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        format!("in [{}]", items.join(", "))
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if self.items.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::new(format!("is not {}", self.readable())))
        }
    }
}

/// Passes when the value is one of `items`.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let color: Validator<&str> = validators::one_of(["red", "green"]);
/// assert!(color.is_valid(&"red"));
/// assert_eq!(
///     color.validate(&"blue").unwrap_err().message(),
///     "is not in [red, green]"
/// );
/// ```
pub fn one_of<T, I>(items: I) -> Validator<T>
where
    T: PartialEq + fmt::Display + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    OneOf::<T>::new(items).validator()
}

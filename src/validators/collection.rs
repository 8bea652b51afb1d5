//! Size rules for strings and collections

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::error::ValidationError;
use crate::validator::Validator;
use crate::validator_type::ValidatorType;

/// Something with a size, and a word for what is being counted.
pub trait Countable {
    /// Singular unit, e.g. "character" or "item".
    const UNIT: &'static str;

    /// Number of units.
    fn count(&self) -> usize;
}

impl Countable for str {
    const UNIT: &'static str = "character";

    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Countable for String {
    const UNIT: &'static str = "character";

    fn count(&self) -> usize {
        self.as_str().count()
    }
}

impl<T> Countable for [T] {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for Vec<T> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for VecDeque<T> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Countable for HashSet<T, S> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Countable for BTreeSet<T> {
    const UNIT: &'static str = "item";

    fn count(&self) -> usize {
        self.len()
    }
}

fn units<T: Countable + ?Sized>(n: usize) -> String {
    if n == 1 {
        format!("{} {}", n, T::UNIT)
    } else {
        format!("{} {}s", n, T::UNIT)
    }
}

/// Passes when the value has no units.
pub struct Empty<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Empty<{}>", std::any::type_name::<T>())
    }
}

impl<T: Countable + ?Sized> ValidatorType for Empty<T> {
    type Value = T;
    type Error = ValidationError;

    fn readable(&self) -> String {
        "empty".to_string()
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if value.count() == 0 {
            Ok(())
        } else {
            Err(ValidationError::new("is not empty"))
        }
    }
}

/// Passes when the value is empty. Usually negated.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let v: Validator<Vec<u8>> = !validators::empty();
/// assert!(v.is_valid(&vec![1]));
/// assert_eq!(v.validate(&vec![]).unwrap_err().message(), "is empty");
/// ```
pub fn empty<T: Countable + ?Sized + 'static>() -> Validator<T> {
    Empty::<T>(PhantomData).validator()
}

/// Passes when the number of units falls in an inclusive `[min, max]`.
///
/// A range that contains no count (`0..0`, `5..=2`) rejects every value.
pub struct Count<T: ?Sized> {
    min: Option<usize>,
    max: Option<usize>,
    unsatisfiable: bool,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Count<T> {
    /// Build from any `usize` range (`1..`, `..=5`, `2..8`).
    pub fn new<R: RangeBounds<usize>>(range: R) -> Self {
        let mut unsatisfiable = false;
        let min = match range.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_add(1).or_else(|| {
                unsatisfiable = true;
                Some(n)
            }),
            Bound::Unbounded => None,
        };
        let max = match range.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_sub(1).or_else(|| {
                unsatisfiable = true;
                Some(n)
            }),
            Bound::Unbounded => None,
        };
        if let (Some(min), Some(max)) = (min, max) {
            unsatisfiable |= min > max;
        }
        Count {
            min,
            max,
            unsatisfiable,
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Count<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Count")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("unsatisfiable", &self.unsatisfiable)
            .finish()
    }
}

impl<T: Countable + ?Sized> ValidatorType for Count<T> {
    type Value = T;
    type Error = ValidationError;

    fn readable(&self) -> String {
        if self.unsatisfiable {
            return "within an empty range".to_string();
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {} and {}", min, units::<T>(max)),
            (Some(min), None) => format!("at least {}", units::<T>(min)),
            (None, Some(max)) => format!("at most {}", units::<T>(max)),
            (None, None) => "valid".to_string(),
        }
    }

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if self.unsatisfiable {
            return Err(ValidationError::new("is outside an empty range"));
        }
        let count = value.count();
        if let Some(min) = self.min {
            if count < min {
                return Err(ValidationError::new(format!(
                    "is less than required minimum of {}",
                    units::<T>(min)
                )));
            }
        }
        if let Some(max) = self.max {
            if count > max {
                return Err(ValidationError::new(format!(
                    "is greater than required maximum of {}",
                    units::<T>(max)
                )));
            }
        }
        Ok(())
    }
}

/// Passes when the number of characters or items is within `range`.
///
/// # Example
///
/// ```rust
/// use validations::{validators, Validator};
///
/// let v: Validator<str> = validators::count(1..5);
/// assert_eq!(v.readable(), "between 1 and 4 characters");
/// assert!(v.is_valid("abcd"));
/// assert_eq!(
///     v.validate("abcde").unwrap_err().message(),
///     "is greater than required maximum of 4 characters"
/// );
/// ```
pub fn count<T, R>(range: R) -> Validator<T>
where
    T: Countable + ?Sized + 'static,
    R: RangeBounds<usize>,
{
    Count::<T>::new(range).validator()
}

//! Validating every item of a stream or iterator
//!
//! Two extension traits, [`StreamValidateExt`] for `futures::Stream` and
//! [`IteratorValidateExt`] for `Iterator`, with the same three adapters:
//!
//! - `validate`: lenient, yields `Some(item)` for valid items and `None` for
//!   invalid ones
//! - `filter_valid`: lenient, drops invalid items
//! - `try_validate`: strict, yields `Ok(item)` until the first invalid item,
//!   then yields that `Err` and ends
//!
//! Each item is checked synchronously as it passes through.
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use validations::{validators, StreamValidateExt, Validator};
//!
//! # tokio_test::block_on(async {
//! let v: Validator<String> = !validators::empty() & validators::count(3..);
//! let values = futures::stream::iter(["", "foo-bar", "foo", "fo"].map(String::from));
//!
//! let seen: Vec<Option<String>> = values.validate(v).collect().await;
//! assert_eq!(
//!     seen,
//!     vec![None, Some("foo-bar".to_string()), Some("foo".to_string()), None]
//! );
//! # });
//! ```

use std::iter;

use futures::future;
use futures::stream::{self, Stream, StreamExt};

use crate::error::ValidationError;
use crate::validator::Validator;

#[cfg(feature = "tracing")]
fn trace_termination(error: &ValidationError) {
    tracing::debug!(reason = %error, "strict validation ended the sequence");
}

#[cfg(not(feature = "tracing"))]
fn trace_termination(_error: &ValidationError) {}

/// Validation adapters for any [`Stream`].
pub trait StreamValidateExt: Stream + Sized {
    /// Map each item to `Some(item)` when valid and `None` when not.
    fn validate(self, validator: Validator<Self::Item>) -> impl Stream<Item = Option<Self::Item>>
    where
        Self::Item: 'static,
    {
        self.map(move |item| validator.result_for(item).ok())
    }

    /// Drop invalid items.
    fn filter_valid(self, validator: Validator<Self::Item>) -> impl Stream<Item = Self::Item>
    where
        Self::Item: 'static,
    {
        self.filter_map(move |item| future::ready(validator.result_for(item).ok()))
    }

    /// Yield valid items as `Ok`; stop after yielding the first failure.
    ///
    /// Items after the failing one are never polled from the source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use validations::{validators, StreamValidateExt, Validator};
    ///
    /// # tokio_test::block_on(async {
    /// let v: Validator<u32> = validators::range(1..);
    /// let results: Vec<_> = futures::stream::iter([3, 0, 5]).try_validate(v).collect().await;
    ///
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0], Ok(3));
    /// assert_eq!(results[1].as_ref().unwrap_err().reason(), "data is less than 1");
    /// # });
    /// ```
    fn try_validate(
        self,
        validator: Validator<Self::Item>,
    ) -> impl Stream<Item = Result<Self::Item, ValidationError>>
    where
        Self::Item: 'static,
    {
        let source = Box::pin(self);
        stream::unfold(Some((source, validator)), |state| async move {
            let (mut source, validator) = state?;
            let item = source.next().await?;
            match validator.result_for(item) {
                Ok(item) => Some((Ok(item), Some((source, validator)))),
                Err(error) => {
                    trace_termination(&error);
                    Some((Err(error), None))
                }
            }
        })
    }
}

impl<S: Stream> StreamValidateExt for S {}

/// Validation adapters for any [`Iterator`].
///
/// # Example
///
/// ```rust
/// use validations::{validators, IteratorValidateExt, Validator};
///
/// let v: Validator<&str> = validators::alphanumeric();
/// let kept: Vec<&str> = ["abc", "a-b", "x1"].into_iter().filter_valid(v).collect();
/// assert_eq!(kept, vec!["abc", "x1"]);
/// ```
pub trait IteratorValidateExt: Iterator + Sized {
    /// Map each item to `Some(item)` when valid and `None` when not.
    fn validate(self, validator: Validator<Self::Item>) -> impl Iterator<Item = Option<Self::Item>>
    where
        Self::Item: 'static,
    {
        self.map(move |item| validator.result_for(item).ok())
    }

    /// Drop invalid items.
    fn filter_valid(self, validator: Validator<Self::Item>) -> impl Iterator<Item = Self::Item>
    where
        Self::Item: 'static,
    {
        self.filter(move |item| validator.is_valid(item))
    }

    /// Yield valid items as `Ok`; stop after yielding the first failure.
    ///
    /// Items after the failing one are never pulled from the source.
    fn try_validate(
        self,
        validator: Validator<Self::Item>,
    ) -> impl Iterator<Item = Result<Self::Item, ValidationError>>
    where
        Self::Item: 'static,
    {
        let mut source = self;
        let mut failed = false;
        iter::from_fn(move || {
            if failed {
                return None;
            }
            let result = validator.result_for(source.next()?);
            if let Err(ref error) = result {
                trace_termination(error);
                failed = true;
            }
            Some(result)
        })
        .fuse()
    }
}

impl<I: Iterator> IteratorValidateExt for I {}

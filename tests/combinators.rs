//! Integration tests for composing validators

use std::error::Error;
use std::fmt;

use validations::{
    assert_invalid_reason, assert_valid, validators, ValidationError, Validator, ValidatorType,
};

fn required_name() -> Validator<String> {
    !validators::empty() & validators::count(1..)
}

#[test]
fn test_and_reports_both_failures() {
    let v = required_name();
    let err = v.validate(&String::new()).unwrap_err();

    assert!(err.path().is_empty());
    assert_eq!(err.identifier(), "validationFailed");
    assert_eq!(
        err.reason(),
        "data is empty and is less than required minimum of 1 character"
    );
}

#[test]
fn test_and_accepts_valid_value() {
    assert_valid!(required_name().validate(&"abc".to_string()));
}

#[test]
fn test_or_joins_messages_when_both_fail() {
    let v: Validator<String> = !validators::empty() | validators::count(5..);
    assert_eq!(v.readable(), "not empty or at least 5 characters");

    assert_invalid_reason!(
        v.validate(&String::new()),
        "data is empty or is less than required minimum of 5 characters"
    );
    assert_valid!(v.validate(&"ab".to_string()));
}

#[test]
fn test_named_methods_match_operators() {
    let by_method: Validator<str> = validators::empty().negate().and(validators::ascii());
    let by_operator: Validator<str> = !validators::empty() & validators::ascii();

    assert_eq!(by_method.readable(), by_operator.readable());
    for input in ["", "abc", "ça"] {
        assert_eq!(by_method.validate(input), by_operator.validate(input));
    }
}

#[test]
fn test_negated_compound_readable() {
    let v: Validator<str> = !(validators::empty() | validators::alphanumeric());
    assert_eq!(v.readable(), "not (empty or alphanumeric)");
    assert_invalid_reason!(v.validate("abc"), "data is empty or alphanumeric");
    assert_valid!(v.validate("a-b"));
}

#[test]
fn test_all_and_any() {
    let all: Validator<Vec<u8>> = Validator::all([!validators::empty(), validators::count(..=3)]);
    assert_eq!(all.readable(), "not empty and at most 3 items");
    assert_invalid_reason!(
        all.validate(&vec![1, 2, 3, 4]),
        "data is greater than required maximum of 3 items"
    );

    let any: Validator<u32> = Validator::any([validators::range(..10), validators::range(100..)]);
    assert_valid!(any.validate(&5));
    assert_valid!(any.validate(&100));
    assert_invalid_reason!(any.validate(&50), "data is not less than 10 or is less than 100");

    let nothing: Validator<u32> = Validator::any(Vec::new());
    assert_invalid_reason!(nothing.validate(&1), "data matches no rule");
}

#[test]
fn test_validators_are_shareable_across_threads() {
    let v = required_name();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let v = v.clone();
            std::thread::spawn(move || v.is_valid(&"x".repeat(i)))
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true]);
}

#[derive(Debug)]
struct Unreadable;

impl fmt::Display for Unreadable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not be read")
    }
}

impl Error for Unreadable {}

struct Readable;

impl ValidatorType for Readable {
    type Value = [u8];
    type Error = Box<dyn Error + Send + Sync>;

    fn readable(&self) -> String {
        "readable".to_string()
    }

    fn validate(&self, value: &[u8]) -> Result<(), Self::Error> {
        if value.is_empty() {
            return Err(Box::new(Unreadable));
        }
        Ok(())
    }
}

#[test]
fn test_generic_error_becomes_validation_error() {
    let v = Readable.validator();
    let err: ValidationError = v.validate(&[]).unwrap_err();

    assert_eq!(err.message(), "could not be read");
    assert_eq!(err.reason(), "data could not be read");
    assert!(v.is_valid(b"ok"));
}

#[test]
fn test_generic_error_keeps_validation_error_path() {
    struct Nested;

    impl ValidatorType for Nested {
        type Value = str;
        type Error = Box<dyn Error + Send + Sync>;

        fn readable(&self) -> String {
            "nested".to_string()
        }

        fn validate(&self, _value: &str) -> Result<(), Self::Error> {
            Err(Box::new(ValidationError::new("is empty").at("name")))
        }
    }

    let err = Nested.validator().validate("x").unwrap_err();
    assert_eq!(err.path(), &["name"]);
    assert_eq!(err.reason(), "name is empty");
}

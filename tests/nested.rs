//! Integration tests for nested delegation and key paths

use validations::{
    assert_invalid_reason, assert_valid, validate_field, validators, ResultPathExt, Validatable,
    ValidationError, ValidationOutcome, Validated, Validator,
};

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    name: String,
    age: u32,
}

impl Validatable for Pet {
    fn validate(&self) -> ValidationOutcome {
        validate_field("name", &self.name, &!validators::empty())?;
        validate_field("age", &self.age, &validators::range(0..=40))
    }
}

#[derive(Debug, Clone)]
struct Owner {
    email: Option<String>,
    pet: Pet,
    previous: Vec<Pet>,
}

impl Validatable for Owner {
    fn validate(&self) -> ValidationOutcome {
        validate_field(
            "email",
            &self.email,
            &(!validators::nil() & (!validators::empty()).when_present()),
        )?;
        validate_field("pet", &self.pet, &validators::valid())?;
        self.previous.validate().at_field("previous")
    }
}

fn owner() -> Owner {
    Owner {
        email: Some("owner@example.com".to_string()),
        pet: Pet {
            name: "barky".to_string(),
            age: 5,
        },
        previous: vec![Pet {
            name: "Coco Chanelle".to_string(),
            age: 12,
        }],
    }
}

#[test]
fn test_pet_with_empty_name() {
    let pet = Pet {
        name: String::new(),
        age: 5,
    };
    let err = pet.validate().unwrap_err();

    assert_eq!(err.path(), &["name"]);
    assert_eq!(err.message(), "is empty");
    assert_eq!(err.reason(), "name is empty");
}

#[test]
fn test_valid_owner() {
    assert_valid!(owner().validate());
}

#[test]
fn test_two_level_path() {
    let mut o = owner();
    o.pet.name.clear();

    let err = o.validate().unwrap_err();
    assert_eq!(err.path(), &["pet", "name"]);
    assert_eq!(err.reason(), "pet.name is empty");
}

#[test]
fn test_path_through_collection_index() {
    let mut o = owner();
    o.previous.push(Pet {
        name: "old".to_string(),
        age: 41,
    });

    assert_invalid_reason!(o.validate(), "previous.1.age is greater than 40");
}

#[test]
fn test_missing_optional_field() {
    let mut o = owner();
    o.email = None;
    assert_invalid_reason!(o.validate(), "email is nil");

    o.email = Some(String::new());
    assert_invalid_reason!(o.validate(), "email is empty");
}

#[test]
fn test_field_validator_on_struct() {
    let v: Validator<Owner> = Validator::field("pet", |o: &Owner| &o.pet, Validator::valid())
        & Validator::field("email", |o: &Owner| &o.email, !validators::nil());

    let mut o = owner();
    o.pet.name.clear();
    o.email = None;

    let err = v.validate(&o).unwrap_err();
    assert!(err.path().is_empty());
    assert_eq!(err.message(), "pet.name is empty and email is nil");
}

#[test]
fn test_paths_compose_with_at() {
    let err = ValidationError::new("is empty")
        .at("name")
        .at("pet")
        .at("owner");
    assert_eq!(err.path_string().as_deref(), Some("owner.pet.name"));
}

#[test]
fn test_held_pet_falls_back() {
    let fallback = Pet {
        name: "Coco Chanelle".to_string(),
        age: 4,
    };
    let mut held = Validated::validatable(fallback.clone(), fallback.clone());
    held.set(Pet {
        name: String::new(),
        age: 3,
    });

    assert_eq!(held.get(), &fallback);
    assert_eq!(
        held.error().map(ValidationError::reason).as_deref(),
        Some("name is empty")
    );
}

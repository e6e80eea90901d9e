//! Required-field rules for [`Person`].

use peopledesk_core::{ValidationErrors, ValidationReason, Validator};

use crate::person::Person;

pub const NAME_FIELD: &str = "Name";
pub const GENDER_FIELD: &str = "Gender";

/// Stateless validator for people.
///
/// Checks always run in the same order (name, then gender) so error lists
/// and joined messages are deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl PersonValidator {
    pub fn new() -> Self {
        Self
    }

    /// Only the name rule. An absent person counts as an absent name.
    pub fn validate_name(&self, person: Option<&Person>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(
            is_blank(person.and_then(Person::name)),
            ValidationReason::required(NAME_FIELD),
        );
        errors
    }

    /// Lookup keys must be present and non-empty.
    pub fn validate_lookup_key(&self, name: Option<&str>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(
            name.is_none_or(str::is_empty),
            ValidationReason::required(NAME_FIELD),
        );
        errors
    }

    /// Keys must be present; any string is accepted.
    pub fn validate_key_present(&self, name: Option<&str>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(name.is_none(), ValidationReason::required(NAME_FIELD));
        errors
    }
}

impl Validator<Person> for PersonValidator {
    fn validate(&self, person: Option<&Person>) -> ValidationErrors {
        let mut errors = self.validate_name(person);
        errors.check(
            person.and_then(Person::gender).is_none(),
            ValidationReason::required(GENDER_FIELD),
        );
        errors
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

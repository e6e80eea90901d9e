//! Validation-first CRUD service for people.

use peopledesk_core::{DomainError, DomainResult, ValidationErrors, Validator};

use crate::person::Person;
use crate::repository::{PersonRepository, RepositoryError};
use crate::validator::PersonValidator;

/// Runs validation before every repository call.
///
/// Each call is independent: the service keeps no state beyond its
/// collaborators. Validation failures are returned immediately as
/// [`DomainError::Validation`]; the repository is not touched.
#[derive(Debug, Clone)]
pub struct PersonService<R> {
    repository: R,
    validator: PersonValidator,
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            validator: PersonValidator::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate name and gender, then store.
    ///
    /// All failing checks are reported together. Returns exactly what the
    /// repository returns.
    pub fn insert(&self, person: Option<Person>) -> DomainResult<Person> {
        let errors = self.validator.validate(person.as_ref());
        let person = match person {
            Some(person) if errors.is_empty() => person,
            _ => return Err(rejected("insert", errors)),
        };

        tracing::debug!(operation = "insert", name = person.name(), "delegating to repository");
        self.repository.insert(person).map_err(storage("insert"))
    }

    /// Validate the name only, then update.
    pub fn update(&self, person: Option<Person>) -> DomainResult<()> {
        let errors = self.validator.validate_name(person.as_ref());
        let person = match person {
            Some(person) if errors.is_empty() => person,
            _ => return Err(rejected("update", errors)),
        };

        tracing::debug!(operation = "update", name = person.name(), "delegating to repository");
        self.repository.update(person).map_err(storage("update"))
    }

    /// Look a person up by name. Absent or empty names are rejected.
    pub fn get(&self, name: Option<&str>) -> DomainResult<Option<Person>> {
        let errors = self.validator.validate_lookup_key(name);
        let name = match name {
            Some(name) if errors.is_empty() => name,
            _ => return Err(rejected("get", errors)),
        };

        tracing::debug!(operation = "get", name, "delegating to repository");
        self.repository.get(name).map_err(storage("get"))
    }

    /// Delete a person by name. Only an absent name is rejected.
    pub fn delete(&self, name: Option<&str>) -> DomainResult<()> {
        let errors = self.validator.validate_key_present(name);
        let name = match name {
            Some(name) if errors.is_empty() => name,
            _ => return Err(rejected("delete", errors)),
        };

        tracing::debug!(operation = "delete", name, "delegating to repository");
        self.repository.delete(name).map_err(storage("delete"))
    }
}

fn rejected(operation: &'static str, errors: ValidationErrors) -> DomainError {
    tracing::warn!(operation, errors = %errors, "validation failed");
    DomainError::validation(errors)
}

fn storage(operation: &'static str) -> impl FnOnce(RepositoryError) -> DomainError {
    move |err| {
        tracing::error!(operation, error = %err, "repository call failed");
        DomainError::repository(err.to_string())
    }
}

//! Storage contract for people.

use std::sync::Arc;

use thiserror::Error;

use crate::person::Person;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
///
/// These are **infrastructure errors**, as opposed to domain validation
/// failures. Arguments are never optional at this layer, so there is no
/// "missing argument" case to report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage collaborator used by [`crate::PersonService`].
///
/// People are keyed by name. `get` returns `Ok(None)` for unknown names.
pub trait PersonRepository: Send + Sync {
    fn insert(&self, person: Person) -> RepositoryResult<Person>;
    fn update(&self, person: Person) -> RepositoryResult<()>;
    fn delete(&self, name: &str) -> RepositoryResult<()>;
    fn get(&self, name: &str) -> RepositoryResult<Option<Person>>;
}

impl<S> PersonRepository for Arc<S>
where
    S: PersonRepository + ?Sized,
{
    fn insert(&self, person: Person) -> RepositoryResult<Person> {
        (**self).insert(person)
    }

    fn update(&self, person: Person) -> RepositoryResult<()> {
        (**self).update(person)
    }

    fn delete(&self, name: &str) -> RepositoryResult<()> {
        (**self).delete(name)
    }

    fn get(&self, name: &str) -> RepositoryResult<Option<Person>> {
        (**self).get(name)
    }
}

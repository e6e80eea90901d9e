use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use peopledesk_people::{Person, PersonRepository, RepositoryError, RepositoryResult};

/// In-memory person store for tests/dev, keyed by name.
///
/// No durability. People without a name are stored under the empty key,
/// so the service's validation is what keeps such records out.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    inner: RwLock<HashMap<String, Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn upsert(&self, person: Person) -> RepositoryResult<Person> {
        let key = person.name().unwrap_or_default().to_string();
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(key.clone(), person.clone());
        tracing::trace!(name = %key, "person stored");
        Ok(person)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("person store lock poisoned".to_string())
}

impl PersonRepository for InMemoryPersonRepository {
    fn insert(&self, person: Person) -> RepositoryResult<Person> {
        self.upsert(person)
    }

    fn update(&self, person: Person) -> RepositoryResult<()> {
        self.upsert(person).map(|_| ())
    }

    fn delete(&self, name: &str) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(name);
        Ok(())
    }

    fn get(&self, name: &str) -> RepositoryResult<Option<Person>> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(name).cloned())
    }
}

use peopledesk_people::{Person, PersonRepository, RepositoryResult};

/// Stand-in storage that keeps nothing.
///
/// `insert` hands its input back, `update`/`delete` are no-ops, and `get`
/// never finds anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoPersonRepository;

impl EchoPersonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl PersonRepository for EchoPersonRepository {
    fn insert(&self, person: Person) -> RepositoryResult<Person> {
        Ok(person)
    }

    fn update(&self, _person: Person) -> RepositoryResult<()> {
        Ok(())
    }

    fn delete(&self, _name: &str) -> RepositoryResult<()> {
        Ok(())
    }

    fn get(&self, _name: &str) -> RepositoryResult<Option<Person>> {
        Ok(None)
    }
}

//! Service wired to the real storage adapters.

use std::sync::Arc;

use peopledesk_core::DomainError;
use peopledesk_infra::{EchoPersonRepository, InMemoryPersonRepository};
use peopledesk_people::{Gender, Person, PersonService};

fn init_logging() {
    peopledesk_observability::init();
}

#[test]
fn echo_repository_returns_inserted_person() {
    init_logging();
    let service = PersonService::new(EchoPersonRepository::new());
    let person = Person::new().with_name("Name").with_age(21).with_gender(Gender::M);

    assert_eq!(service.insert(Some(person.clone())).unwrap(), person);
    assert_eq!(service.get(Some("Name")).unwrap(), None);
}

#[test]
fn echo_repository_still_rejects_invalid_input() {
    init_logging();
    let service = PersonService::new(EchoPersonRepository::new());

    let err = service.insert(Some(Person::new().with_gender(Gender::M))).unwrap_err();
    assert_eq!(err.errors(), vec!["Name is required"]);
    assert_eq!(err.to_string(), "Name is required");

    let err = service.insert(None).unwrap_err();
    assert_eq!(err.to_string(), "Name is required;Gender is required");
}

#[test]
fn person_lifecycle_against_in_memory_store() {
    init_logging();
    let service = PersonService::new(InMemoryPersonRepository::new());

    let person = Person::new().with_name("Name").with_gender(Gender::F);
    service.insert(Some(person.clone())).unwrap();
    assert_eq!(service.get(Some("Name")).unwrap(), Some(person.clone()));

    let updated = person.clone().with_age(18);
    service.update(Some(updated.clone())).unwrap();
    assert_eq!(service.get(Some("Name")).unwrap(), Some(updated));

    service.delete(Some("Name")).unwrap();
    assert_eq!(service.get(Some("Name")).unwrap(), None);
    assert!(service.repository().is_empty());
}

#[test]
fn rejected_calls_leave_store_untouched() {
    init_logging();
    let service = PersonService::new(InMemoryPersonRepository::new());

    assert!(matches!(
        service.insert(Some(Person::new().with_name("  "))),
        Err(DomainError::Validation(_))
    ));
    assert!(service.update(Some(Person::new().with_gender(Gender::M))).is_err());
    assert!(service.delete(None).is_err());
    assert!(service.get(Some("")).is_err());

    assert!(service.repository().is_empty());
}

#[test]
fn update_without_gender_is_accepted() {
    init_logging();
    let service = PersonService::new(InMemoryPersonRepository::new());

    let partial = Person::new().with_name("Name").with_age(40);
    service.update(Some(partial.clone())).unwrap();
    assert_eq!(service.get(Some("Name")).unwrap(), Some(partial));
}

#[test]
fn services_can_share_one_store() {
    init_logging();
    let store = Arc::new(InMemoryPersonRepository::new());
    let writer = PersonService::new(Arc::clone(&store));
    let reader = PersonService::new(Arc::clone(&store));

    let person = Person::new().with_name("Shared").with_gender(Gender::M);
    writer.insert(Some(person.clone())).unwrap();

    assert_eq!(reader.get(Some("Shared")).unwrap(), Some(person));
    assert_eq!(store.len(), 1);
}

//! People domain module.
//!
//! This crate contains the `Person` entity, its validation rules and the
//! service that enforces them before delegating to a [`PersonRepository`].
//! Storage implementations live in `peopledesk-infra`.

pub mod person;
pub mod repository;
pub mod service;
pub mod validator;

pub use person::{Gender, Person};
pub use repository::{PersonRepository, RepositoryError, RepositoryResult};
pub use service::PersonService;
pub use validator::PersonValidator;

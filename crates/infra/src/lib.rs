//! Infrastructure layer: storage adapters behind the domain's repository traits.

pub mod repository;

pub use repository::{EchoPersonRepository, InMemoryPersonRepository};

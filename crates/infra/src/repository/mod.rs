//! `PersonRepository` implementations.

pub mod echo;
pub mod in_memory;

pub use echo::EchoPersonRepository;
pub use in_memory::InMemoryPersonRepository;

//! `peopledesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model and the validation vocabulary shared by domain modules.

pub mod error;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use validation::{ValidationErrors, ValidationReason, Validator};

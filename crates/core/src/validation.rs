//! Validation reasons and their ordered aggregation.
//!
//! Validators never fail fast: every applicable check appends a
//! [`ValidationReason`] to a [`ValidationErrors`] collection, and the caller
//! decides whether the collection is fatal (see [`ValidationErrors::into_result`]).

use crate::error::{DomainError, DomainResult};

/// Separator used when rendering several reasons into a single message.
pub const MESSAGE_SEPARATOR: &str = ";";

/// A single, typed validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    /// A required field was absent or blank.
    Required { field: &'static str },
}

impl ValidationReason {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Label of the field this reason refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationReason::Required { field } => field,
        }
    }
}

impl core::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationReason::Required { field } => write!(f, "{field} is required"),
        }
    }
}

/// Ordered collection of validation reasons, empty when the subject is valid.
///
/// Insertion order is preserved so rendered messages are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    reasons: Vec<ValidationReason>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding exactly one reason.
    pub fn single(reason: ValidationReason) -> Self {
        Self {
            reasons: vec![reason],
        }
    }

    pub fn push(&mut self, reason: ValidationReason) {
        self.reasons.push(reason);
    }

    /// Append `reason` only when `failed` holds.
    pub fn check(&mut self, failed: bool, reason: ValidationReason) {
        if failed {
            self.push(reason);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn reasons(&self) -> &[ValidationReason] {
        &self.reasons
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationReason> {
        self.reasons.iter()
    }

    /// Human-readable messages, one per reason, in order.
    pub fn messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    /// All messages joined with [`MESSAGE_SEPARATOR`].
    pub fn message(&self) -> String {
        self.messages().join(MESSAGE_SEPARATOR)
    }

    /// `Ok(())` when empty, otherwise a [`DomainError::Validation`] carrying `self`.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<ValidationReason> for ValidationErrors {
    fn from(reason: ValidationReason) -> Self {
        Self::single(reason)
    }
}

impl FromIterator<ValidationReason> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationReason>>(iter: I) -> Self {
        Self {
            reasons: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationReason;
    type IntoIter = std::vec::IntoIter<ValidationReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

/// Validates an optional subject, producing every applicable reason.
///
/// An absent subject is a legitimate input: implementations decide which
/// reasons it produces instead of dereferencing it.
pub trait Validator<T: ?Sized> {
    fn validate(&self, subject: Option<&T>) -> ValidationErrors;
}

use serde::{Deserialize, Serialize};

/// Gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// A person record.
///
/// Every field may be absent: nothing is enforced at construction. Required
/// fields are checked on demand by [`crate::PersonValidator`]. The `name`
/// doubles as the lookup key in repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    name: Option<String>,
    age: Option<u32>,
    gender: Option<Gender>,
}

impl Person {
    /// Create an empty record (all fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_age(&mut self, age: Option<u32>) {
        self.age = age;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }
}

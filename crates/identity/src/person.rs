use serde::{Deserialize, Serialize};

use eventdesk_core::{DomainResult, Entity, PersonId, validate_email};

use crate::Role;

/// A person known to the system.
///
/// # Invariants
/// - `id` and `role` are immutable after creation.
/// - Capabilities come solely from the role; a `Person` carries no grants of
///   its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    email: String,
    phone: String,
    role: Role,
}

impl Person {
    /// Create a person, validating the email against the presence rule.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> DomainResult<Self> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            id,
            name: name.into(),
            email,
            phone: phone.into(),
            role,
        })
    }

    /// Rebuild a person from stored fields without re-validating.
    ///
    /// For the persistence boundary: records already in the store are taken
    /// as-is.
    pub fn rehydrate(
        id: PersonId,
        name: String,
        email: String,
        phone: String,
        role: Role,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

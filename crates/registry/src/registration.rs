use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eventdesk_core::{Entity, EventId, PersonId, RegistrationId};

/// Lifecycle status of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Active,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Active => "ACTIVE",
            RegistrationStatus::Cancelled => "CANCELLED",
        }
    }
}

impl core::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for RegistrationStatus {
    type Err = eventdesk_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(RegistrationStatus::Active),
            "CANCELLED" => Ok(RegistrationStatus::Cancelled),
            other => Err(eventdesk_core::DomainError::invalid_argument(format!(
                "unknown registration status '{other}'"
            ))),
        }
    }
}

/// A historical record tying a person to an event.
///
/// Cancelling changes the status; the record itself is never deleted by a
/// cancel, so history is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    id: RegistrationId,
    person_id: PersonId,
    event_id: EventId,
    registered_on: NaiveDate,
    status: RegistrationStatus,
}

impl Registration {
    /// A fresh ACTIVE registration dated `registered_on`.
    pub fn new(
        id: RegistrationId,
        person_id: PersonId,
        event_id: EventId,
        registered_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            person_id,
            event_id,
            registered_on,
            status: RegistrationStatus::Active,
        }
    }

    /// Rebuild a record from stored fields, status included.
    pub fn rehydrate(
        id: RegistrationId,
        person_id: PersonId,
        event_id: EventId,
        registered_on: NaiveDate,
        status: RegistrationStatus,
    ) -> Self {
        Self {
            id,
            person_id,
            event_id,
            registered_on,
            status,
        }
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn registered_on(&self) -> NaiveDate {
        self.registered_on
    }

    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == RegistrationStatus::Active
    }

    /// Mark the record cancelled. Idempotent at this layer; whether a
    /// second cancel is an error is decided by the engine.
    pub fn cancel(&mut self) {
        self.status = RegistrationStatus::Cancelled;
    }
}

impl Entity for Registration {
    type Id = RegistrationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

use std::collections::HashMap;

use chrono::Utc;
use tracing::{info, warn};

use eventdesk_catalog::{Event, EventKind};
use eventdesk_core::{
    DomainError, DomainResult, Entity, EventDate, EventId, PersonId, RegistrationId,
};
use eventdesk_identity::{Permission, Person, Role, authorize};
use eventdesk_registry::{Ledger, Registration};
use eventdesk_store::{Snapshot, SnapshotStore};

use crate::config::{CascadePolicy, EngineConfig};
use crate::report::SystemReport;

/// Input for [`Engine::create_event`].
///
/// The date arrives as raw text because well-formedness checking is this
/// layer's rule; everything else is already a domain value.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub venue: String,
    pub capacity: u32,
    pub kind: EventKind,
}

/// Field updates for [`Engine::update_event`]. `None` keeps the current
/// value.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub capacity: Option<u32>,
}

/// The session state machine.
///
/// Owns the collections exclusively; stores only ever see full snapshot
/// copies. Every operation either fully applies or fully fails, leaving the
/// collections and the ledger consistent.
#[derive(Debug)]
pub struct Engine {
    persons: HashMap<PersonId, Person>,
    events: HashMap<EventId, Event>,
    ledger: Ledger,
    config: EngineConfig,
}

impl Engine {
    /// Cold start: empty collections.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            persons: HashMap::new(),
            events: HashMap::new(),
            ledger: Ledger::new(),
            config,
        }
    }

    /// Init boundary: adopt a loaded snapshot.
    pub fn from_snapshot(snapshot: Snapshot, config: EngineConfig) -> Self {
        let persons = snapshot
            .persons
            .into_iter()
            .map(|p| (*p.id(), p))
            .collect();
        let events = snapshot.events.into_iter().map(|e| (*e.id(), e)).collect();
        Self {
            persons,
            events,
            ledger: Ledger::from_records(snapshot.registrations),
            config,
        }
    }

    /// Load a snapshot from `store` and build an engine around it.
    pub fn load(store: &impl SnapshotStore, config: EngineConfig) -> DomainResult<Self> {
        let snapshot = store
            .load()
            .map_err(|e| DomainError::persistence(e.to_string()))?;
        Ok(Self::from_snapshot(snapshot, config))
    }

    /// Teardown boundary: copy the full current state out.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            persons: self.persons.values().cloned().collect(),
            events: self.events.values().cloned().collect(),
            registrations: self.ledger.iter().cloned().collect(),
        }
    }

    /// Persist the current state. A store failure is surfaced but leaves the
    /// in-memory state untouched and authoritative.
    pub fn save(&self, store: &impl SnapshotStore) -> DomainResult<()> {
        store.save(&self.snapshot()).map_err(|e| {
            warn!(error = %e, "snapshot save failed; in-memory state retained");
            DomainError::persistence(e.to_string())
        })
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    // ── Lookups ─────────────────────────────────────────────────────────

    pub fn person(&self, id: PersonId) -> DomainResult<&Person> {
        self.persons
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("person {id}")))
    }

    pub fn event(&self, id: EventId) -> DomainResult<&Event> {
        self.events
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("event {id}")))
    }

    pub fn registration(&self, id: RegistrationId) -> DomainResult<&Registration> {
        self.ledger
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("registration {id}")))
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Events whose date string equals `date` exactly. The query string is
    /// compared raw, not validated.
    pub fn events_on(&self, date: &str) -> Vec<&Event> {
        self.events
            .values()
            .filter(|e| e.date().as_str() == date)
            .collect()
    }

    /// All events, ordered lexically by their date string (title breaks
    /// ties). Lexical order matches chronology only within a month.
    pub fn events_sorted_by_date(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.values().collect();
        events.sort_by(|a, b| a.date().cmp(b.date()).then_with(|| a.title().cmp(b.title())));
        events
    }

    pub fn events_by_organizer(&self, organizer_id: PersonId) -> Vec<&Event> {
        self.events
            .values()
            .filter(|e| e.organizer_id() == organizer_id)
            .collect()
    }

    /// All registrations held by a person, any status.
    pub fn registrations_for(&self, person_id: PersonId) -> DomainResult<Vec<&Registration>> {
        self.person(person_id)?;
        Ok(self.ledger.by_person(person_id).collect())
    }

    /// Persons holding an ACTIVE registration for the event. The actor must
    /// be an admin or the owning organizer with `view-attendees`.
    pub fn attendees_of(&self, actor: PersonId, event_id: EventId) -> DomainResult<Vec<&Person>> {
        let actor = self.person(actor)?;
        let event = self.event(event_id)?;

        let is_owner = event.organizer_id() == *actor.id();
        if actor.role() != Role::Admin {
            authorize(actor.role(), Permission::ViewAttendees)?;
            if !is_owner {
                return Err(DomainError::permission_denied(
                    Permission::ViewAttendees.as_str(),
                ));
            }
        }

        Ok(self
            .ledger
            .by_event(event_id)
            .filter(|r| r.is_active())
            .filter_map(|r| self.persons.get(&r.person_id()))
            .collect())
    }

    /// Aggregate counts over the live collections. Pure read.
    pub fn report(&self, actor: PersonId) -> DomainResult<SystemReport> {
        let actor = self.person(actor)?;
        authorize(actor.role(), Permission::ViewReports)?;
        Ok(SystemReport::over(
            self.persons.values(),
            self.events.values(),
            self.ledger.len(),
        ))
    }

    // ── User management ─────────────────────────────────────────────────

    /// Open enrollment: create an Attendee or Organizer account.
    pub fn sign_up(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> DomainResult<PersonId> {
        if role == Role::Admin {
            return Err(DomainError::invalid_argument(
                "admin accounts require an existing admin",
            ));
        }
        let id = PersonId::new();
        let person = Person::new(id, name, email, phone, role)?;
        info!(person = %id, role = %role, "person enrolled");
        self.persons.insert(id, person);
        Ok(id)
    }

    /// Create an Admin account. Requires `manage-users`.
    pub fn create_admin(
        &mut self,
        actor: PersonId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<PersonId> {
        let actor = self.person(actor)?;
        authorize(actor.role(), Permission::ManageUsers)?;

        let id = PersonId::new();
        let person = Person::new(id, name, email, phone, Role::Admin)?;
        info!(person = %id, "admin account created");
        self.persons.insert(id, person);
        Ok(id)
    }

    /// Delete a user account. Requires `manage-users`; the acting user may
    /// not delete themselves. Their ledger records follow the cascade
    /// policy.
    pub fn delete_user(&mut self, actor: PersonId, user_id: PersonId) -> DomainResult<()> {
        let acting = self.person(actor)?;
        authorize(acting.role(), Permission::ManageUsers)?;
        self.person(user_id)?;
        if actor == user_id {
            return Err(DomainError::SelfDeleteForbidden);
        }

        self.persons.remove(&user_id);
        match self.config.cascade {
            CascadePolicy::HardDelete => {
                let removed = self.ledger.remove_by_person(user_id);
                info!(person = %user_id, removed = removed.len(), "user deleted, registrations removed");
            }
            CascadePolicy::SoftCancel => {
                let affected: Vec<(RegistrationId, EventId)> = self
                    .ledger
                    .by_person(user_id)
                    .filter(|r| r.is_active())
                    .map(|r| (*r.id(), r.event_id()))
                    .collect();
                for (registration_id, event_id) in &affected {
                    if let Some(record) = self.ledger.get_mut(*registration_id) {
                        record.cancel();
                    }
                    if let Some(event) = self.events.get_mut(event_id) {
                        event.decrement_registration();
                    }
                }
                info!(person = %user_id, cancelled = affected.len(), "user deleted, registrations cancelled");
            }
        }
        Ok(())
    }

    // ── Event lifecycle ─────────────────────────────────────────────────

    /// Create an event owned by the actor. Requires `create-event`.
    pub fn create_event(&mut self, actor: PersonId, new_event: NewEvent) -> DomainResult<EventId> {
        let acting = self.person(actor)?;
        authorize(acting.role(), Permission::CreateEvent)?;

        if new_event.capacity == 0 {
            return Err(DomainError::invalid_argument("capacity must be positive"));
        }
        let date = EventDate::parse(&new_event.date)?;

        let id = EventId::new();
        let event = Event::new(
            id,
            new_event.title,
            new_event.description,
            date,
            new_event.venue,
            new_event.capacity,
            actor,
            new_event.kind,
        );
        info!(event = %id, kind = %event.event_type(), organizer = %actor, "event created");
        self.events.insert(id, event);
        Ok(id)
    }

    /// Update event fields. Allowed for an admin or the owning organizer.
    pub fn update_event(
        &mut self,
        actor: PersonId,
        event_id: EventId,
        changes: EventChanges,
    ) -> DomainResult<()> {
        let acting = self.person(actor)?;
        let acting_role = acting.role();
        self.ensure_can_manage(acting_role, actor, event_id, Permission::ManageOwnEvents)?;

        // Validate everything before touching the event, so a failed update
        // leaves it unchanged.
        let date = changes.date.as_deref().map(EventDate::parse).transpose()?;
        if let Some(capacity) = changes.capacity {
            if capacity == 0 {
                return Err(DomainError::invalid_argument("capacity must be positive"));
            }
            // Shrinking below the live count would break the
            // `registered_count <= capacity` invariant.
            let registered = self.event(event_id)?.registered_count();
            if capacity < registered {
                return Err(DomainError::invalid_argument(format!(
                    "capacity {capacity} is below the {registered} already registered"
                )));
            }
        }

        let event = self
            .events
            .get_mut(&event_id)
            .ok_or_else(|| DomainError::not_found(format!("event {event_id}")))?;
        if let Some(title) = changes.title {
            event.set_title(title);
        }
        if let Some(description) = changes.description {
            event.set_description(description);
        }
        if let Some(date) = date {
            event.set_date(date);
        }
        if let Some(venue) = changes.venue {
            event.set_venue(venue);
        }
        if let Some(capacity) = changes.capacity {
            event.set_capacity(capacity);
        }
        info!(event = %event_id, "event updated");
        Ok(())
    }

    /// Delete an event. Allowed for an admin or the owning organizer. The
    /// ledger records referencing it follow the cascade policy.
    pub fn delete_event(&mut self, actor: PersonId, event_id: EventId) -> DomainResult<()> {
        let acting = self.person(actor)?;
        let acting_role = acting.role();
        self.ensure_can_manage(acting_role, actor, event_id, Permission::DeleteEvent)?;

        self.events.remove(&event_id);
        match self.config.cascade {
            CascadePolicy::HardDelete => {
                let removed = self.ledger.remove_by_event(event_id);
                info!(event = %event_id, removed = removed.len(), "event deleted, registrations removed");
            }
            CascadePolicy::SoftCancel => {
                let mut cancelled = 0usize;
                for record in self.ledger.records_mut() {
                    if record.event_id() == event_id && record.is_active() {
                        record.cancel();
                        cancelled += 1;
                    }
                }
                info!(event = %event_id, cancelled, "event deleted, registrations cancelled");
            }
        }
        Ok(())
    }

    /// Admin, or the owning organizer holding `fallback`.
    fn ensure_can_manage(
        &self,
        acting_role: Role,
        actor: PersonId,
        event_id: EventId,
        fallback: Permission,
    ) -> DomainResult<()> {
        let event = self.event(event_id)?;
        if acting_role == Role::Admin {
            return Ok(());
        }
        if event.organizer_id() != actor {
            return Err(DomainError::permission_denied(fallback.as_str()));
        }
        authorize(acting_role, Permission::ManageOwnEvents)
    }

    // ── Registration ────────────────────────────────────────────────────

    /// Register a person for an event.
    ///
    /// Checks in order: event exists, no ACTIVE registration for the pair,
    /// capacity gate. Only after the gate admits is the ledger record
    /// appended, so a failure at any step leaves no trace.
    pub fn register(&mut self, person_id: PersonId, event_id: EventId) -> DomainResult<RegistrationId> {
        self.person(person_id)?;
        self.event(event_id)?;

        if self.ledger.active_for(person_id, event_id).is_some() {
            return Err(DomainError::DuplicateRegistration);
        }

        let event = self
            .events
            .get_mut(&event_id)
            .ok_or_else(|| DomainError::not_found(format!("event {event_id}")))?;
        if !event.increment_registration() {
            return Err(DomainError::CapacityExceeded);
        }

        let id = RegistrationId::new();
        let registration =
            Registration::new(id, person_id, event_id, Utc::now().date_naive());
        self.ledger.append(registration);
        info!(registration = %id, person = %person_id, event = %event_id, "registered");
        Ok(id)
    }

    /// Cancel an ACTIVE registration: mark it CANCELLED and return its slot
    /// to the event. The record is kept.
    pub fn cancel(&mut self, registration_id: RegistrationId) -> DomainResult<()> {
        let record = self
            .ledger
            .get_mut(registration_id)
            .filter(|r| r.is_active())
            .ok_or_else(|| {
                DomainError::not_found(format!("active registration {registration_id}"))
            })?;
        record.cancel();
        let event_id = record.event_id();

        if let Some(event) = self.events.get_mut(&event_id) {
            event.decrement_registration();
        }
        info!(registration = %registration_id, event = %event_id, "registration cancelled");
        Ok(())
    }

    /// Count of ACTIVE registrations for an event, from the ledger side.
    pub fn active_registrations(&self, event_id: EventId) -> usize {
        self.ledger
            .by_event(event_id)
            .filter(|r| r.is_active())
            .count()
    }
}

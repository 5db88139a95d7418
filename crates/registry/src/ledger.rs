use eventdesk_core::{Entity, EventId, PersonId, RegistrationId};

use crate::{Registration, RegistrationStatus};

/// Flat, append-mostly collection of registration records.
///
/// Deliberately invariant-free: duplicate and capacity checks live in the
/// engine, which scans the ledger through the filters below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<Registration>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Registration>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, registration: Registration) {
        self.records.push(registration);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.records.iter()
    }

    pub fn get(&self, id: RegistrationId) -> Option<&Registration> {
        self.records.iter().find(|r| *r.id() == id)
    }

    pub fn get_mut(&mut self, id: RegistrationId) -> Option<&mut Registration> {
        self.records.iter_mut().find(|r| *r.id() == id)
    }

    pub fn by_person(&self, person_id: PersonId) -> impl Iterator<Item = &Registration> {
        self.records.iter().filter(move |r| r.person_id() == person_id)
    }

    pub fn by_event(&self, event_id: EventId) -> impl Iterator<Item = &Registration> {
        self.records.iter().filter(move |r| r.event_id() == event_id)
    }

    pub fn by_status(&self, status: RegistrationStatus) -> impl Iterator<Item = &Registration> {
        self.records.iter().filter(move |r| r.status() == status)
    }

    /// The ACTIVE record for a person+event pair, if one exists.
    pub fn active_for(&self, person_id: PersonId, event_id: EventId) -> Option<&Registration> {
        self.records.iter().find(|r| {
            r.person_id() == person_id && r.event_id() == event_id && r.is_active()
        })
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut Registration> {
        self.records.iter_mut()
    }

    /// Drop every record referencing the event. Returns the removed records.
    pub fn remove_by_event(&mut self, event_id: EventId) -> Vec<Registration> {
        let (removed, kept) = self
            .records
            .drain(..)
            .partition(|r| r.event_id() == event_id);
        self.records = kept;
        removed
    }

    /// Drop every record referencing the person. Returns the removed records.
    pub fn remove_by_person(&mut self, person_id: PersonId) -> Vec<Registration> {
        let (removed, kept) = self
            .records
            .drain(..)
            .partition(|r| r.person_id() == person_id);
        self.records = kept;
        removed
    }
}

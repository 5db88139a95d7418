use serde::{Deserialize, Serialize};

use eventdesk_catalog::{Event, EventType};
use eventdesk_identity::{Person, Role};

/// Person counts by role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub admins: usize,
    pub organizers: usize,
    pub attendees: usize,
}

/// Event counts by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeCounts {
    pub conferences: usize,
    pub workshops: usize,
    pub concerts: usize,
}

/// Aggregate view over the live collections. Pure read, no mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemReport {
    pub total_users: usize,
    pub total_events: usize,
    pub total_registrations: usize,
    pub users_by_role: RoleCounts,
    pub events_by_type: EventTypeCounts,
}

impl SystemReport {
    pub fn over<'a>(
        persons: impl Iterator<Item = &'a Person>,
        events: impl Iterator<Item = &'a Event>,
        total_registrations: usize,
    ) -> Self {
        let mut report = SystemReport {
            total_registrations,
            ..Default::default()
        };
        for person in persons {
            report.total_users += 1;
            match person.role() {
                Role::Admin => report.users_by_role.admins += 1,
                Role::Organizer => report.users_by_role.organizers += 1,
                Role::Attendee => report.users_by_role.attendees += 1,
            }
        }
        for event in events {
            report.total_events += 1;
            match event.event_type() {
                EventType::Conference => report.events_by_type.conferences += 1,
                EventType::Workshop => report.events_by_type.workshops += 1,
                EventType::Concert => report.events_by_type.concerts += 1,
            }
        }
        report
    }
}

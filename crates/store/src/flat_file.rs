//! Flat-file store: three comma-separated text files in one directory.
//!
//! Line formats:
//! - `users.txt`: id,name,email,phone,role
//! - `events.txt`: id,title,description,date,venue,capacity,registered_count,organizer_id,type
//! - `registrations.txt`: id,person_id,event_id,date,status
//!
//! Known fidelity gap: the event line carries the type tag but not the
//! type-specific attribute, so reload substitutes fixed placeholders
//! (5 speakers, 8 hours, "Unknown Artist"). Fields are written raw, with no
//! escaping; a comma inside a field corrupts its line. Lines that fail to
//! parse are skipped with a warning rather than failing the whole load.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::warn;

use eventdesk_catalog::{Event, EventKind, EventType};
use eventdesk_core::{Entity, EventDate};
use eventdesk_identity::Person;
use eventdesk_registry::Registration;

use crate::{Snapshot, SnapshotStore, StoreError};

const USERS_FILE: &str = "users.txt";
const EVENTS_FILE: &str = "events.txt";
const REGISTRATIONS_FILE: &str = "registrations.txt";

const PLACEHOLDER_SPEAKERS: u32 = 5;
const PLACEHOLDER_DURATION_HOURS: u32 = 8;
const PLACEHOLDER_ARTIST: &str = "Unknown Artist";

/// Store backed by three flat files under a directory.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    dir: PathBuf,
}

impl FlatFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_lines(&self, file: &str) -> Result<Vec<String>, StoreError> {
        let path = self.dir.join(file);
        let handle = match fs::File::open(&path) {
            Ok(handle) => handle,
            // Cold start: an absent file is an empty collection.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut lines = Vec::new();
        for line in BufReader::new(handle).lines() {
            lines.push(line?);
        }
        Ok(lines)
    }

    fn write_lines(&self, file: &str, lines: &[String]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let mut handle = fs::File::create(self.dir.join(file))?;
        for line in lines {
            writeln!(handle, "{line}")?;
        }
        Ok(())
    }

    fn load_persons(&self) -> Result<Vec<Person>, StoreError> {
        let mut persons = Vec::new();
        for line in self.read_lines(USERS_FILE)? {
            let parts: Vec<&str> = line.split(',').collect();
            let parsed = (|| {
                let [id, name, email, phone, role] = parts.as_slice() else {
                    return None;
                };
                Some(Person::rehydrate(
                    id.parse().ok()?,
                    (*name).to_string(),
                    (*email).to_string(),
                    (*phone).to_string(),
                    role.parse().ok()?,
                ))
            })();
            match parsed {
                Some(person) => persons.push(person),
                None => warn!(%line, "skipping malformed user line"),
            }
        }
        Ok(persons)
    }

    fn load_events(&self) -> Result<Vec<Event>, StoreError> {
        let mut events = Vec::new();
        for line in self.read_lines(EVENTS_FILE)? {
            let parts: Vec<&str> = line.split(',').collect();
            let parsed = (|| {
                let [id, title, description, date, venue, capacity, registered, organizer, ty] =
                    parts.as_slice()
                else {
                    return None;
                };
                // The attribute was not serialized; substitute placeholders.
                let kind = match ty.parse::<EventType>().ok()? {
                    EventType::Conference => EventKind::Conference {
                        speakers: PLACEHOLDER_SPEAKERS,
                    },
                    EventType::Workshop => EventKind::Workshop {
                        duration_hours: PLACEHOLDER_DURATION_HOURS,
                    },
                    EventType::Concert => EventKind::Concert {
                        artist: PLACEHOLDER_ARTIST.to_string(),
                    },
                };
                Some(Event::rehydrate(
                    id.parse().ok()?,
                    (*title).to_string(),
                    (*description).to_string(),
                    EventDate::parse(date).ok()?,
                    (*venue).to_string(),
                    capacity.parse().ok()?,
                    registered.parse().ok()?,
                    organizer.parse().ok()?,
                    kind,
                ))
            })();
            match parsed {
                Some(event) => events.push(event),
                None => warn!(%line, "skipping malformed event line"),
            }
        }
        Ok(events)
    }

    fn load_registrations(&self) -> Result<Vec<Registration>, StoreError> {
        let mut registrations = Vec::new();
        for line in self.read_lines(REGISTRATIONS_FILE)? {
            let parts: Vec<&str> = line.split(',').collect();
            let parsed = (|| {
                let [id, person, event, date, status] = parts.as_slice() else {
                    return None;
                };
                Some(Registration::rehydrate(
                    id.parse().ok()?,
                    person.parse().ok()?,
                    event.parse().ok()?,
                    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
                    status.parse().ok()?,
                ))
            })();
            match parsed {
                Some(registration) => registrations.push(registration),
                None => warn!(%line, "skipping malformed registration line"),
            }
        }
        Ok(registrations)
    }
}

impl SnapshotStore for FlatFileStore {
    fn load(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            persons: self.load_persons()?,
            events: self.load_events()?,
            registrations: self.load_registrations()?,
        })
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let users: Vec<String> = snapshot
            .persons
            .iter()
            .map(|p| {
                format!(
                    "{},{},{},{},{}",
                    p.id(),
                    p.name(),
                    p.email(),
                    p.phone(),
                    p.role()
                )
            })
            .collect();
        self.write_lines(USERS_FILE, &users)?;

        let events: Vec<String> = snapshot
            .events
            .iter()
            .map(|e| {
                format!(
                    "{},{},{},{},{},{},{},{},{}",
                    e.id(),
                    e.title(),
                    e.description(),
                    e.date(),
                    e.venue(),
                    e.capacity(),
                    e.registered_count(),
                    e.organizer_id(),
                    e.event_type()
                )
            })
            .collect();
        self.write_lines(EVENTS_FILE, &events)?;

        let registrations: Vec<String> = snapshot
            .registrations
            .iter()
            .map(|r| {
                format!(
                    "{},{},{},{},{}",
                    r.id(),
                    r.person_id(),
                    r.event_id(),
                    r.registered_on().format("%Y-%m-%d"),
                    r.status()
                )
            })
            .collect();
        self.write_lines(REGISTRATIONS_FILE, &registrations)
    }
}

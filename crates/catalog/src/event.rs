use serde::{Deserialize, Serialize};

use eventdesk_core::{Entity, EventDate, EventId, PersonId};

/// Event type tag, without the per-kind payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Conference,
    Workshop,
    Concert,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Conference => "CONFERENCE",
            EventType::Workshop => "WORKSHOP",
            EventType::Concert => "CONCERT",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for EventType {
    type Err = eventdesk_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFERENCE" => Ok(EventType::Conference),
            "WORKSHOP" => Ok(EventType::Workshop),
            "CONCERT" => Ok(EventType::Concert),
            other => Err(eventdesk_core::DomainError::invalid_argument(format!(
                "unknown event type '{other}'"
            ))),
        }
    }
}

/// Event kind with its type-specific attribute.
///
/// Closed set, so the cost rule below is exhaustive and checked at compile
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Conference { speakers: u32 },
    Workshop { duration_hours: u32 },
    Concert { artist: String },
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Conference { .. } => EventType::Conference,
            EventKind::Workshop { .. } => EventType::Workshop,
            EventKind::Concert { .. } => EventType::Concert,
        }
    }
}

/// Aggregate root: a capacity-bounded event.
///
/// # Invariants
/// - `0 <= registered_count <= capacity` at all times; `registered_count`
///   changes only through [`Event::increment_registration`] and
///   [`Event::decrement_registration`].
/// - `id`, `organizer_id`, and `kind` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    date: EventDate,
    venue: String,
    capacity: u32,
    registered_count: u32,
    organizer_id: PersonId,
    kind: EventKind,
}

impl Event {
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        date: EventDate,
        venue: impl Into<String>,
        capacity: u32,
        organizer_id: PersonId,
        kind: EventKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            date,
            venue: venue.into(),
            capacity,
            registered_count: 0,
            organizer_id,
            kind,
        }
    }

    /// Rebuild an event from stored fields, restoring its registered count.
    ///
    /// For the persistence boundary. The count is clamped to capacity so a
    /// hand-edited store cannot break the invariant.
    pub fn rehydrate(
        id: EventId,
        title: String,
        description: String,
        date: EventDate,
        venue: String,
        capacity: u32,
        registered_count: u32,
        organizer_id: PersonId,
        kind: EventKind,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date,
            venue,
            capacity,
            registered_count: registered_count.min(capacity),
            organizer_id,
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &EventDate {
        &self.date
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn registered_count(&self) -> u32 {
        self.registered_count
    }

    pub fn organizer_id(&self) -> PersonId {
        self.organizer_id
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Per-kind cost, in whole currency units.
    ///
    /// Pure function of the kind and its attribute; no side effects.
    pub fn calculate_cost(&self) -> u64 {
        match &self.kind {
            EventKind::Conference { speakers } => 500 + 100 * u64::from(*speakers),
            EventKind::Workshop { duration_hours } => 200 + 50 * u64::from(*duration_hours),
            EventKind::Concert { .. } => 1000,
        }
    }

    /// The capacity gate: claim one slot.
    ///
    /// Succeeds only while `registered_count < capacity`; on refusal nothing
    /// changes. Callers must check the return value.
    #[must_use]
    pub fn increment_registration(&mut self) -> bool {
        if self.registered_count < self.capacity {
            self.registered_count += 1;
            true
        } else {
            false
        }
    }

    /// Return one slot to the pool. No-op at zero.
    pub fn decrement_registration(&mut self) {
        if self.registered_count > 0 {
            self.registered_count -= 1;
        }
    }

    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    // Field mutators write directly; validation is the engine's
    // responsibility.

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_date(&mut self, date: EventDate) {
        self.date = date;
    }

    pub fn set_venue(&mut self, venue: impl Into<String>) {
        self.venue = venue.into();
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

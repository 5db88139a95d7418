use serde::{Deserialize, Serialize};

use eventdesk_catalog::Event;
use eventdesk_identity::Person;
use eventdesk_registry::Registration;

/// The full set of records exchanged with a store at load/save boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub persons: Vec<Person>,
    pub events: Vec<Event>,
    pub registrations: Vec<Registration>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.events.is_empty() && self.registrations.is_empty()
    }
}

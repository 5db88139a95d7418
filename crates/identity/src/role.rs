use serde::{Deserialize, Serialize};

use crate::Permission;

/// Role held by a person.
///
/// Assigned at creation and immutable for the lifetime of the person. The
/// permission set is a pure function of the role (see [`Role::permissions`]);
/// there are no per-instance overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Attendee,
    Organizer,
    Admin,
}

impl Role {
    /// The fixed capability table for this role.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Attendee => &[
                Permission::RegisterEvent,
                Permission::ViewEvents,
                Permission::CancelRegistration,
            ],
            Role::Organizer => &[
                Permission::CreateEvent,
                Permission::ManageOwnEvents,
                Permission::ViewAttendees,
            ],
            Role::Admin => &[
                Permission::CreateEvent,
                Permission::DeleteEvent,
                Permission::ManageUsers,
                Permission::ViewReports,
            ],
        }
    }

    /// Capability-set membership check.
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Attendee => "ATTENDEE",
            Role::Organizer => "ORGANIZER",
            Role::Admin => "ADMIN",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = eventdesk_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATTENDEE" => Ok(Role::Attendee),
            "ORGANIZER" => Ok(Role::Organizer),
            "ADMIN" => Ok(Role::Admin),
            other => Err(eventdesk_core::DomainError::invalid_argument(format!(
                "unknown role '{other}'"
            ))),
        }
    }
}

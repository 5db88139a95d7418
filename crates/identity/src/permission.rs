use serde::{Deserialize, Serialize};

/// A named action a role is authorized to perform.
///
/// The set is closed: permissions exist only as members of a role's fixed
/// capability table, never as free-form strings or per-person grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    RegisterEvent,
    ViewEvents,
    CancelRegistration,
    CreateEvent,
    ManageOwnEvents,
    ViewAttendees,
    DeleteEvent,
    ManageUsers,
    ViewReports,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::RegisterEvent => "register-event",
            Permission::ViewEvents => "view-events",
            Permission::CancelRegistration => "cancel-registration",
            Permission::CreateEvent => "create-event",
            Permission::ManageOwnEvents => "manage-own-events",
            Permission::ViewAttendees => "view-attendees",
            Permission::DeleteEvent => "delete-event",
            Permission::ManageUsers => "manage-users",
            Permission::ViewReports => "view-reports",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

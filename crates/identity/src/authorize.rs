use eventdesk_core::{DomainError, DomainResult};

use crate::{Permission, Role};

/// Authorize a role against a required capability.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check against the role's fixed table)
pub fn authorize(role: Role, required: Permission) -> DomainResult<()> {
    if role.allows(required) {
        Ok(())
    } else {
        Err(DomainError::permission_denied(required.as_str()))
    }
}

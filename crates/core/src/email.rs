//! Email validation.

use crate::error::{DomainError, DomainResult};

/// Check a string against the email rule.
///
/// Valid iff non-empty and containing both `@` and `.` anywhere. No
/// positional or structural checks beyond presence.
pub fn validate_email(email: &str) -> DomainResult<()> {
    if !email.is_empty() && email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(DomainError::invalid_argument(format!(
            "invalid email: '{email}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_emails_with_at_and_dot() {
        assert!(validate_email("alice@example.com").is_ok());
        // Presence-only rule: position is not checked.
        assert!(validate_email(".@").is_ok());
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(validate_email("").is_err());
        assert!(validate_email("alice.example.com").is_err());
        assert!(validate_email("alice@examplecom").is_err());
    }
}

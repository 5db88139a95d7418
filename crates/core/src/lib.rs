//! `eventdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod date;
pub mod email;
pub mod entity;
pub mod error;
pub mod id;

pub use date::EventDate;
pub use email::validate_email;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, PersonId, RegistrationId};

//! `eventdesk-identity` — people, roles, and the capability model.
//!
//! This crate is pure domain logic: who a person is, which role they hold,
//! and which capabilities that role grants. No IO, no storage.

pub mod authorize;
pub mod permission;
pub mod person;
pub mod role;

pub use authorize::authorize;
pub use permission::Permission;
pub use person::Person;
pub use role::Role;

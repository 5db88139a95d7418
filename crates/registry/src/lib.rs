//! `eventdesk-registry` — the registration ledger.
//!
//! A flat collection of registration records. The ledger enforces no
//! capacity or uniqueness invariant of its own; that is the engine's job.
//! Keeping it a pure data store keeps enforcement in one place.

pub mod ledger;
pub mod registration;

pub use ledger::Ledger;
pub use registration::{Registration, RegistrationStatus};

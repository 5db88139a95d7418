//! `eventdesk-engine` — the business-rule engine.
//!
//! The [`Engine`] owns the live collections (persons, events, ledger) for
//! the lifetime of a session and is the single place where cross-entity
//! rules are enforced: duplicate registration, the capacity gate, role
//! gating, and cascade policy on deletes. It is single-threaded by design;
//! mutations take `&mut self`, so any concurrent wrapper must add its own
//! mutual exclusion around the whole engine.

pub mod config;
pub mod engine;
pub mod report;

pub use config::{CascadePolicy, EngineConfig};
pub use engine::{Engine, EventChanges, NewEvent};
pub use report::{EventTypeCounts, RoleCounts, SystemReport};

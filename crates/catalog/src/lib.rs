//! `eventdesk-catalog` — capacity-bounded events and their pricing rules.
//!
//! Pure domain logic: event state, per-kind cost formulas, and the capacity
//! gate. Validation of creation input is the engine's job, not this crate's.

pub mod event;

pub use event::{Event, EventKind, EventType};

//! `eventdesk-store` — the external persistence collaborator.
//!
//! The engine exchanges full in-memory snapshots with a [`SnapshotStore`]:
//! load on startup (an absent store is a valid cold start), save on demand.
//! Stores never hold references into the live collections.

pub mod flat_file;
pub mod in_memory;
pub mod snapshot;

pub use flat_file::FlatFileStore;
pub use in_memory::InMemoryStore;
pub use snapshot::Snapshot;

use thiserror::Error;

/// Store-level error, mapped to `DomainError::Persistence` at the engine
/// boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Full-snapshot persistence boundary.
pub trait SnapshotStore {
    /// Read the complete record set, or an empty snapshot if the store has
    /// never been written (cold start is not an error).
    fn load(&self) -> Result<Snapshot, StoreError>;

    /// Durably persist the complete record set, overwriting prior contents.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

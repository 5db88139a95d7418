use std::sync::RwLock;

use crate::{Snapshot, SnapshotStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Holds whole snapshots, never references into the
/// engine's live collections.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: RwLock<Snapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot, StoreError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *guard = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_the_same_snapshot() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let snapshot = Snapshot::default();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }
}

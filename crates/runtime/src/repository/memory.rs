//! In-memory RegistryRepository implementation for tests and local runs.

use std::sync::RwLock;

use super::{RegistryRepository, RegistrySnapshot, RepositoryError, Result};

/// In-memory implementation of RegistryRepository.
#[derive(Default)]
pub struct InMemoryRegistryRepository {
    snapshot: RwLock<Option<RegistrySnapshot>>,
}

impl InMemoryRegistryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a snapshot already stored.
    pub fn with_snapshot(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl RegistryRepository for InMemoryRegistryRepository {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<()> {
        let mut stored = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<RegistrySnapshot>> {
        let stored = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(stored.clone())
    }

    fn exists(&self) -> bool {
        self.snapshot
            .read()
            .map(|stored| stored.is_some())
            .unwrap_or(false)
    }
}

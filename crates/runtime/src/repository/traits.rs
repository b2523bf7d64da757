//! Repository contract for saving and loading the statistic registry.

use super::{RegistrySnapshot, Result};

/// Repository for registry persistence and loading.
///
/// Invoked by the host at defined save and load points, never concurrently
/// with itself.
pub trait RegistryRepository: Send + Sync {
    /// Save the full registry, replacing any previous snapshot.
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<()>;

    /// Load the last saved snapshot. `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<RegistrySnapshot>>;

    /// Check if a snapshot exists
    fn exists(&self) -> bool;
}

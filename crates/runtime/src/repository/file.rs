//! File-based RegistryRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{RegistryRepository, RegistrySnapshot, RepositoryError, Result};

/// File-based implementation of RegistryRepository.
///
/// Stores the registry as a single pretty-printed JSON document. Writes go
/// to a sibling temp file first and are moved into place with a rename, so a
/// crash mid-save leaves the previous snapshot intact.
pub struct FileRegistryRepository {
    path: PathBuf,
}

impl FileRegistryRepository {
    /// Create a repository for `path`, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryRepository for FileRegistryRepository {
    fn save(&self, snapshot: &RegistrySnapshot) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} custom statistics to {}",
            snapshot.custom_statistics.len(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<RegistrySnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let snapshot: RegistrySnapshot =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded {} custom statistic records from {}",
            snapshot.custom_statistics.len(),
            self.path.display()
        );

        Ok(Some(snapshot))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

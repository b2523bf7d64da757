//! Content factory for building browsing content from data files.

use std::path::{Path, PathBuf};

use browser::{BrowserConfig, CreativeCatalog};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, StatPlacementLoader};
use crate::placement::StatPlacement;

/// Content factory that loads all browsing content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── creative.ron
/// └── statistics.ron
/// ```
///
/// Every file is optional: a missing file yields the empty or default value.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load browser configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BrowserConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(BrowserConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the creative catalog from `creative.ron`.
    pub fn load_catalog(&self) -> LoadResult<CreativeCatalog> {
        let path = self.data_dir.join("creative.ron");
        if !path.exists() {
            return Ok(CreativeCatalog::new());
        }
        CatalogLoader::load(&path)
    }

    /// Load general statistic placements from `statistics.ron`.
    pub fn load_stat_placements(&self) -> LoadResult<Vec<StatPlacement>> {
        let path = self.data_dir.join("statistics.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        StatPlacementLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

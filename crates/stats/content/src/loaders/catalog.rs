//! Creative catalog loader.

use std::path::Path;

use browser::CreativeCatalog;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::placement::CreativePlacement;

/// Creative catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeCatalogFile {
    pub placements: Vec<CreativePlacement>,
}

/// Loader for the creative catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the creative catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing CreativeCatalogFile
    pub fn load(path: &Path) -> LoadResult<CreativeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CreativeCatalog> {
        let file: CreativeCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creative catalog RON: {}", e))?;

        Ok(CreativePlacement::build_catalog(file.placements))
    }
}

//! Content loaders for reading browsing data from files.
//!
//! This module provides loaders that convert RON/TOML files into the
//! catalog, statistic placements and browser configuration.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod placements;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use placements::StatPlacementLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

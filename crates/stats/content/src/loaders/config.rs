//! Browser configuration loader.

use std::path::Path;

use browser::BrowserConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for browser configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing BrowserConfig
    ///
    /// # Returns
    ///
    /// Returns a BrowserConfig. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BrowserConfig> {
        let content = read_file(path)?;
        let config: BrowserConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

//! Runtime configuration.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::registry::StatisticRegistry;

/// Where the runtime keeps its data and how it names new statistics.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding the registry file and the browsing content files.
    pub data_dir: PathBuf,
    /// Registry file name, relative to `data_dir` unless absolute.
    pub registry_file: PathBuf,
    /// Namespace custom statistics are created under.
    pub namespace: String,
    /// Overrides the page size of every screen from `config.toml` when set.
    pub page_size: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("", "", "topper")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./topper_data"));

        Self {
            data_dir,
            registry_file: PathBuf::from("custom_statistics.json"),
            namespace: StatisticRegistry::DEFAULT_NAMESPACE.to_string(),
            page_size: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOPPER_DATA_DIR` - Data directory (default: platform data dir)
    /// - `TOPPER_REGISTRY_FILE` - Registry file name (default: custom_statistics.json)
    /// - `TOPPER_NAMESPACE` - Namespace for new statistics (default: bbstats)
    /// - `TOPPER_PAGE_SIZE` - Entries per page on every browsing screen
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TOPPER_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(file) = read_env::<PathBuf>("TOPPER_REGISTRY_FILE") {
            config.registry_file = file;
        }
        if let Some(namespace) = read_env::<String>("TOPPER_NAMESPACE")
            && !namespace.is_empty()
        {
            config.namespace = namespace;
        }
        if let Some(size) = read_env::<usize>("TOPPER_PAGE_SIZE") {
            config.page_size = Some(size.max(1));
        }

        config
    }

    /// Use `data_dir` for everything.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(&self.registry_file)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! Host context for the statistics runtime.
//!
//! [`Runtime`] owns the live registry, its persistence adapter, and the
//! static browsing content. Hosts build one with [`RuntimeBuilder`] at
//! startup and call [`Runtime::save_if_dirty`] at their save points.

use browser::{
    BrowserConfig, BrowserState, CreativeCatalog, CreativeTab, InMemoryStatOracle, Page,
    PaginatedBrowser, StatOracle, StatisticsTab,
};
use stats_content::{ContentFactory, StatPlacement};

use crate::commands::StatisticCommands;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::registry::StatisticRegistry;
use crate::repository::{FileRegistryRepository, RegistryRepository};
use crate::views;

pub struct Runtime {
    config: RuntimeConfig,
    registry: StatisticRegistry,
    repository: Box<dyn RegistryRepository>,
    catalog: CreativeCatalog,
    placements: Vec<StatPlacement>,
    oracle: Box<dyn StatOracle>,
    browser_config: BrowserConfig,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn registry(&self) -> &StatisticRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StatisticRegistry {
        &mut self.registry
    }

    /// Command handlers over the live registry.
    pub fn commands(&mut self) -> StatisticCommands<'_> {
        StatisticCommands::new(&mut self.registry)
    }

    pub fn catalog(&self) -> &CreativeCatalog {
        &self.catalog
    }

    pub fn placements(&self) -> &[StatPlacement] {
        &self.placements
    }

    pub fn oracle(&self) -> &dyn StatOracle {
        self.oracle.as_ref()
    }

    pub fn browser_config(&self) -> &BrowserConfig {
        &self.browser_config
    }

    /// Writes the registry and clears the dirty flag.
    pub fn save(&mut self) -> Result<()> {
        let snapshot = self.registry.serialize();
        self.repository.save(&snapshot)?;
        self.registry.clear_dirty();

        tracing::info!(
            statistics = snapshot.custom_statistics.len(),
            "Saved custom statistics"
        );
        Ok(())
    }

    /// Saves only when something changed. Returns whether a write happened.
    ///
    /// On failure the registry stays dirty so the next pass retries.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.registry.is_dirty() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// One page of the creative screen for `subject`.
    pub fn creative_page(&self, state: &BrowserState<CreativeTab>, subject: &str) -> Page {
        let browser =
            PaginatedBrowser::new(self.browser_config.creative_page_size(), self.oracle());
        let tab = state.tab();

        if tab.is_unfiltered() {
            return browser.page_all(self.catalog.entries(), &state.request(), subject);
        }
        browser.page(
            self.catalog.entries(),
            |entry| {
                entry
                    .as_item()
                    .is_some_and(|item| self.catalog.in_tab(tab, &item.id))
            },
            &state.request(),
            subject,
        )
    }

    /// One page of the statistics screen for `subject`.
    pub fn statistics_page(&self, state: &BrowserState<StatisticsTab>, subject: &str) -> Page {
        let browser =
            PaginatedBrowser::new(self.browser_config.statistics_page_size(), self.oracle());

        let entries = match state.tab() {
            StatisticsTab::General => views::general_rows(
                &self.placements,
                &self.registry,
                subject,
                self.oracle(),
                state.criterion(),
            ),
            StatisticsTab::Items => self.catalog.entries(),
        };

        browser.page_all(entries, &state.request(), subject)
    }
}

/// Builder for [`Runtime`].
///
/// Anything not provided is loaded from the configured data directory: the
/// registry through a [`FileRegistryRepository`], the browsing content
/// through a [`ContentFactory`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Box<dyn RegistryRepository>>,
    oracle: Option<Box<dyn StatOracle>>,
    catalog: Option<CreativeCatalog>,
    placements: Option<Vec<StatPlacement>>,
    browser_config: Option<BrowserConfig>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            oracle: None,
            catalog: None,
            placements: None,
            browser_config: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the registry persistence adapter
    pub fn repository(mut self, repository: impl RegistryRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set the source of built-in statistic values
    pub fn oracle(mut self, oracle: impl StatOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    pub fn catalog(mut self, catalog: CreativeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn placements(mut self, placements: Vec<StatPlacement>) -> Self {
        self.placements = Some(placements);
        self
    }

    pub fn browser_config(mut self, browser_config: BrowserConfig) -> Self {
        self.browser_config = Some(browser_config);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let config = self.config;
        let factory = ContentFactory::new(config.data_dir.clone());

        let repository: Box<dyn RegistryRepository> = match self.repository {
            Some(repository) => repository,
            None => Box::new(FileRegistryRepository::new(config.registry_path())?),
        };

        let registry = match repository.load()? {
            Some(snapshot) => {
                let (registry, report) =
                    StatisticRegistry::deserialize(&snapshot, config.namespace.clone());
                if report.skipped > 0 {
                    tracing::warn!(
                        loaded = report.loaded,
                        skipped = report.skipped,
                        "Loaded custom statistics with skipped records"
                    );
                } else {
                    tracing::info!(loaded = report.loaded, "Loaded custom statistics");
                }
                registry
            }
            None => {
                tracing::info!("No saved custom statistics, starting empty");
                StatisticRegistry::new(config.namespace.clone())
            }
        };

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => factory.load_catalog().map_err(content_error)?,
        };
        let placements = match self.placements {
            Some(placements) => placements,
            None => factory.load_stat_placements().map_err(content_error)?,
        };
        let mut browser_config = match self.browser_config {
            Some(browser_config) => browser_config,
            None => factory.load_config().map_err(content_error)?,
        };
        if let Some(page_size) = config.page_size {
            browser_config = BrowserConfig::uniform(page_size);
        }

        tracing::debug!(
            items = catalog.len(),
            general_stats = placements.len(),
            creative_page_size = browser_config.creative_page_size(),
            statistics_page_size = browser_config.statistics_page_size(),
            "Browsing content ready"
        );

        Ok(Runtime {
            config,
            registry,
            repository,
            catalog,
            placements,
            oracle: self
                .oracle
                .unwrap_or_else(|| Box::new(InMemoryStatOracle::new())),
            browser_config,
        })
    }
}

fn content_error(error: anyhow::Error) -> RuntimeError {
    RuntimeError::Content {
        message: format!("{error:#}"),
    }
}

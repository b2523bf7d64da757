//! Sortable, paginated browsing shared by the creative catalog and the
//! statistics screen.
//!
//! The browser never owns data. Callers hand it a fresh sequence of
//! [`BrowsableEntry`] values per view; it filters by tab, orders with the
//! active [`SortCriterion`] and [`SortOrder`], then slices out one page.
//!
//! Per-subject numbers for built-in statistics are read through the
//! [`StatOracle`] seam so the host decides where they come from.
pub mod browser;
pub mod catalog;
pub mod config;
pub mod criterion;
pub mod entry;
pub mod oracle;
pub mod order;
pub mod state;
pub mod tab;

pub use browser::{Page, PageRequest, PaginatedBrowser, total_pages};
pub use catalog::CreativeCatalog;
pub use config::BrowserConfig;
pub use criterion::SortCriterion;
pub use entry::{BrowsableEntry, CatalogItem, StatRow};
pub use oracle::{InMemoryStatOracle, ItemStatKind, StatOracle};
pub use order::SortOrder;
pub use state::BrowserState;
pub use tab::{CreativeTab, StatisticsTab, Tab};

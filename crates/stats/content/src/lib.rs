//! Data-driven browsing content and loaders.
//!
//! This crate houses the statically registered content of the browsing
//! screens and provides loaders for RON/TOML data files:
//! - Creative catalog placements (data-driven via RON)
//! - General statistics shown on the statistics screen (data-driven via RON)
//! - Browser configuration (data-driven via TOML)
//!
//! Content is registered once at startup and never appears in the persisted
//! statistic registry.

pub mod placement;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use placement::{CreativePlacement, StatPlacement};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult, StatPlacementLoader};

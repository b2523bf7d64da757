//! Host-side runtime for custom statistics and the browsing screens.
//!
//! This crate owns the single live [`StatisticRegistry`], persists it through
//! a [`RegistryRepository`], exposes the command-layer operations in
//! [`StatisticCommands`], and builds browsing pages from static content plus
//! per-subject values. Consumers embed [`Runtime`] and pass it by reference
//! into their command and rendering handlers.
//!
//! Modules are organized by responsibility:
//! - [`registry`] holds the collection, dirty tracking and persistence round-trip
//! - [`commands`] authorizes and applies command-layer operations
//! - [`views`] turns registry and host data into browsable rows
//! - [`repository`] provides persistence adapters
//! - [`runtime`] hosts the context object and its builder
pub mod caller;
pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod repository;
pub mod runtime;
pub mod views;

pub use caller::Caller;
pub use commands::{CommandOutcome, Feedback, StatisticCommands};
pub use config::RuntimeConfig;
pub use error::{RegistryError, Result, RuntimeError};
pub use registry::{LoadReport, StatisticRegistry};
pub use repository::{
    FileRegistryRepository, InMemoryRegistryRepository, RegistryRepository, RegistrySnapshot,
    RepositoryError, StatisticRecord,
};
pub use runtime::{Runtime, RuntimeBuilder};

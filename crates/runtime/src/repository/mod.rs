//! Repository layer for the persisted statistic registry.
//!
//! Repositories only move [`RegistrySnapshot`] values in and out of storage.
//! Reconstructing statistics from a snapshot, including skipping malformed
//! records, is the registry's job.

mod error;
mod file;
mod memory;
mod records;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileRegistryRepository;
pub use memory::InMemoryRegistryRepository;
pub use records::{RegistrySnapshot, StatisticRecord};
pub use traits::RegistryRepository;

//! Error types surfaced by the runtime API.
//!
//! Registry errors are caller-facing and classified with [`StatsError`];
//! runtime errors wrap persistence and content failures during startup and
//! save passes.
use stats_core::{ErrorSeverity, KeyError, StatisticKey, StatsError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Rejections raised by [`crate::StatisticRegistry`] before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a custom statistic already exists with key {key}")]
    AlreadyExists { key: StatisticKey },

    #[error("no custom statistic with key {key}")]
    NotFound { key: StatisticKey },

    #[error(transparent)]
    InvalidKey(#[from] KeyError),
}

impl StatsError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "REGISTRY_ALREADY_EXISTS",
            Self::NotFound { .. } => "REGISTRY_NOT_FOUND",
            Self::InvalidKey(inner) => inner.error_code(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load browsing content: {message}")]
    Content { message: String },
}

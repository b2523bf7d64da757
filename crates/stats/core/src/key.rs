//! Namespaced statistic identifiers.
//!
//! Keys follow resource-identifier rules: `<namespace>:<path>` where the
//! namespace is `[a-z0-9_.-]+` and the path is `[a-z0-9_.-/]+`. A bare path
//! resolves into [`StatisticKey::DEFAULT_NAMESPACE`].

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, StatsError};

/// Errors raised while parsing or constructing a [`StatisticKey`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("statistic key is empty")]
    Empty,

    #[error("invalid namespace '{namespace}' in statistic key")]
    InvalidNamespace { namespace: String },

    #[error("invalid path '{path}' in statistic key")]
    InvalidPath { path: String },
}

impl StatsError for KeyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "KEY_EMPTY",
            Self::InvalidNamespace { .. } => "KEY_INVALID_NAMESPACE",
            Self::InvalidPath { .. } => "KEY_INVALID_PATH",
        }
    }
}

/// Globally unique identifier of a custom statistic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct StatisticKey {
    namespace: String,
    path: String,
}

impl StatisticKey {
    /// Namespace used when a key is written without one.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Builds a key from validated parts.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let path = path.into();

        if !Self::is_valid_namespace(&namespace) {
            return Err(KeyError::InvalidNamespace { namespace });
        }
        if !Self::is_valid_path(&path) {
            return Err(KeyError::InvalidPath { path });
        }

        Ok(Self { namespace, path })
    }

    /// Parses `"<namespace>:<path>"` or a bare path, returning `None` on failure.
    pub fn try_parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if `path` is non-empty and only uses `[a-z0-9_.-/]`.
    pub fn is_valid_path(path: &str) -> bool {
        !path.is_empty()
            && path
                .bytes()
                .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'/'))
    }

    /// Returns true if `namespace` is non-empty and only uses `[a-z0-9_.-]`.
    pub fn is_valid_namespace(namespace: &str) -> bool {
        !namespace.is_empty()
            && namespace
                .bytes()
                .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-'))
    }
}

impl fmt::Display for StatisticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for StatisticKey {
    type Err = KeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }

        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(Self::DEFAULT_NAMESPACE, raw),
        }
    }
}

impl TryFrom<String> for StatisticKey {
    type Error = KeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<StatisticKey> for String {
    fn from(key: StatisticKey) -> Self {
        key.to_string()
    }
}

//! Common error infrastructure for stats-core.
//!
//! Domain-specific errors (e.g. [`crate::KeyError`]) live next to the types
//! they validate. This module only provides the shared classification so
//! callers can choose how to report a failure without matching every variant.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: blank or malformed input, rejected before any mutation
/// - **Authorization**: the caller lacks the required standing on a statistic
/// - **Corruption**: a persisted record could not be reconstructed
/// - **Internal**: unexpected state inconsistency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    Validation,

    /// Caller does not own or maintain the statistic.
    Authorization,

    /// Load-time data loss limited to a single record.
    Corruption,

    /// Indicates a bug and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::Corruption => "corruption",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the failure was caused by caller input rather than state.
    pub const fn is_caller_fault(&self) -> bool {
        matches!(self, Self::Validation | Self::Authorization)
    }
}

/// Common trait for all statistic errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act on it, not by impact
pub trait StatsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_fault_classification() {
        assert!(ErrorSeverity::Validation.is_caller_fault());
        assert!(ErrorSeverity::Authorization.is_caller_fault());
        assert!(!ErrorSeverity::Corruption.is_caller_fault());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}

//! Custom statistic model shared by the registry, the command layer and the
//! browsing surfaces.
//!
//! `stats-core` defines what a player-defined statistic *is* (identity,
//! ownership, maintainers, display metadata, per-subject scores) and the pure
//! operations on it. Ownership of the collection, dirty tracking and
//! persistence live in the `runtime` crate; nothing here performs I/O.
pub mod error;
pub mod format;
pub mod icon;
pub mod key;
pub mod pertain;
pub mod score;
pub mod statistic;
pub mod subject;

pub use error::{ErrorSeverity, StatsError};
pub use format::StatFormat;
pub use icon::DisplayIcon;
pub use key::{KeyError, StatisticKey};
pub use pertain::Pertainability;
pub use score::ScoreTable;
pub use statistic::CustomStatistic;
pub use subject::{MAX_SUBJECT_NAME_LEN, is_blank, is_valid_subject_name};

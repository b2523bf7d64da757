//! Subcommand definitions.

mod browse;
mod players;
mod stats;

pub use browse::Browse;
pub use players::PlayersCommand;
pub use stats::StatsCommand;

/// Splits a comma separated target list, dropping empty pieces.
pub(crate) fn split_targets(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|target| !target.is_empty())
        .collect()
}

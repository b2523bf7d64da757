use clap::Parser;
use runtime::{Caller, Runtime};

use super::split_targets;
use crate::output::print_outcome;

/// Score commands. Targets are comma separated player names.
#[derive(Parser)]
pub enum PlayersCommand {
    /// Show one player's score
    Get { key: String, target: String },

    /// List every score, highest first
    List { key: String },

    /// Add to scores (default 1)
    Add {
        key: String,
        targets: String,
        #[arg(allow_negative_numbers = true)]
        amount: Option<i32>,
    },

    /// Subtract from scores (default 1)
    Remove {
        key: String,
        targets: String,
        #[arg(allow_negative_numbers = true)]
        amount: Option<i32>,
    },

    /// Set scores to a value
    Set {
        key: String,
        targets: String,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Reset scores to 0
    Reset { key: String, targets: String },
}

impl PlayersCommand {
    pub fn execute(self, runtime: &mut Runtime, caller: &Caller) -> bool {
        let mut commands = runtime.commands();

        let outcome = match &self {
            Self::Get { key, target } => commands.players_get(caller, key, target),
            Self::List { key } => commands.players_list(caller, key),
            Self::Add {
                key,
                targets,
                amount,
            } => commands.players_add(caller, key, &split_targets(targets), *amount),
            Self::Remove {
                key,
                targets,
                amount,
            } => commands.players_remove(caller, key, &split_targets(targets), *amount),
            Self::Set {
                key,
                targets,
                value,
            } => commands.players_set(caller, key, &split_targets(targets), *value),
            Self::Reset { key, targets } => {
                commands.players_reset(caller, key, &split_targets(targets))
            }
        };

        print_outcome(&outcome)
    }
}

use clap::Parser;
use runtime::{Caller, Runtime};
use stats_core::Pertainability;

use crate::output::print_outcome;

/// Custom statistic management
#[derive(Parser)]
pub enum StatsCommand {
    /// Create a custom statistic (operators only)
    Add {
        /// Key path, e.g. `kills`
        key: String,
        /// Name shown on the statistics screen
        display_name: String,
        /// Player who owns the statistic
        owner: String,
    },

    /// Delete a custom statistic (operators only)
    Remove { key: String },

    /// List every custom statistic
    List,

    /// Show a statistic's properties
    Get { key: String },

    /// Key paths the acting caller can address
    Keys {
        /// all, maintains, or owns
        #[arg(long, default_value = "all")]
        mode: Pertainability,
    },

    /// Change a statistic (owner only)
    Modify {
        key: String,
        #[command(subcommand)]
        change: Modification,
    },
}

#[derive(Parser)]
pub enum Modification {
    /// Rename the statistic
    Displayname { name: String },

    /// Set or reset the icon
    #[command(subcommand)]
    Displayitem(DisplayItem),

    /// Change the number format (default, divide_by_ten, distance, time)
    Format { format_name: String },

    /// Add or remove maintainers
    #[command(subcommand)]
    Maintainers(Maintainers),

    /// Transfer ownership
    Owner { owner_name: String },
}

#[derive(Parser)]
pub enum DisplayItem {
    /// Use an item as the icon
    Set { item: String },
    /// Go back to the owner's head
    Reset,
}

#[derive(Parser)]
pub enum Maintainers {
    Add { name: String },
    Remove { name: String },
}

impl StatsCommand {
    pub fn execute(self, runtime: &mut Runtime, caller: &Caller) -> bool {
        let mut commands = runtime.commands();

        let outcome = match self {
            Self::Add {
                key,
                display_name,
                owner,
            } => commands.create(caller, &key, &display_name, &owner),
            Self::Remove { key } => commands.delete(caller, &key),
            Self::List => commands.list(),
            Self::Get { key } => commands.get(caller, &key),
            Self::Keys { mode } => {
                let keys = commands.suggest_keys(caller, mode);
                if keys.is_empty() {
                    println!("No custom stats for mode {mode}");
                } else {
                    keys.iter().for_each(|key| println!("{key}"));
                }
                return true;
            }
            Self::Modify { key, change } => match change {
                Modification::Displayname { name } => commands.set_display_name(caller, &key, &name),
                Modification::Displayitem(DisplayItem::Set { item }) => {
                    commands.set_display_icon(caller, &key, &item)
                }
                Modification::Displayitem(DisplayItem::Reset) => {
                    commands.reset_display_icon(caller, &key)
                }
                Modification::Format { format_name } => commands.set_format(caller, &key, &format_name),
                Modification::Maintainers(Maintainers::Add { name }) => {
                    commands.add_maintainer(caller, &key, &name)
                }
                Modification::Maintainers(Maintainers::Remove { name }) => {
                    commands.remove_maintainer(caller, &key, &name)
                }
                Modification::Owner { owner_name } => commands.transfer_owner(caller, &key, &owner_name),
            },
        };

        print_outcome(&outcome)
    }
}

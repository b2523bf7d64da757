//! Read access to the host's built-in statistics.

use std::collections::HashMap;

/// Per-item statistics the host tracks for every player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemStatKind {
    /// Only meaningful for block items.
    Mined,
    Broken,
    Crafted,
    Used,
    PickedUp,
    Dropped,
}

impl ItemStatKind {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mined => "Times Mined",
            Self::Broken => "Times Broken",
            Self::Crafted => "Times Crafted",
            Self::Used => "Times Used",
            Self::PickedUp => "Picked Up",
            Self::Dropped => "Dropped",
        }
    }
}

/// Oracle for the host's built-in statistic values.
///
/// Unknown combinations read as `0`, like an untouched counter.
pub trait StatOracle {
    fn item_stat(&self, subject: &str, kind: ItemStatKind, item_id: &str) -> i32;

    fn general_stat(&self, subject: &str, stat_id: &str) -> i32;
}

/// StatOracle implementation backed by in-memory maps.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStatOracle {
    items: HashMap<(String, ItemStatKind, String), i32>,
    general: HashMap<(String, String), i32>,
}

impl InMemoryStatOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_item(
        &mut self,
        subject: impl Into<String>,
        kind: ItemStatKind,
        item_id: impl Into<String>,
        value: i32,
    ) {
        self.items
            .insert((subject.into(), kind, item_id.into()), value);
    }

    pub fn record_general(
        &mut self,
        subject: impl Into<String>,
        stat_id: impl Into<String>,
        value: i32,
    ) {
        self.general.insert((subject.into(), stat_id.into()), value);
    }
}

impl StatOracle for InMemoryStatOracle {
    fn item_stat(&self, subject: &str, kind: ItemStatKind, item_id: &str) -> i32 {
        self.items
            .get(&(subject.to_owned(), kind, item_id.to_owned()))
            .copied()
            .unwrap_or(0)
    }

    fn general_stat(&self, subject: &str, stat_id: &str) -> i32 {
        self.general
            .get(&(subject.to_owned(), stat_id.to_owned()))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_read_zero() {
        let mut oracle = InMemoryStatOracle::new();
        oracle.record_item("alice", ItemStatKind::Crafted, "minecraft:torch", 12);
        oracle.record_general("alice", "blackblock:votes", 3);

        assert_eq!(
            oracle.item_stat("alice", ItemStatKind::Crafted, "minecraft:torch"),
            12
        );
        assert_eq!(
            oracle.item_stat("alice", ItemStatKind::Used, "minecraft:torch"),
            0
        );
        assert_eq!(oracle.general_stat("alice", "blackblock:votes"), 3);
        assert_eq!(oracle.general_stat("bob", "blackblock:votes"), 0);
    }
}

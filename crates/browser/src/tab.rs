//! Tabs of the two browsing surfaces.

use core::fmt::Debug;

use crate::criterion::SortCriterion;

/// A named view over browsable entries that also restricts which sort
/// criteria can be selected while it is active.
pub trait Tab: Copy + Eq + Debug {
    /// Tab selected when a screen opens.
    fn initial() -> Self;

    fn display_name(&self) -> &'static str;

    fn icon(&self) -> &'static str;

    /// Criteria selectable while this tab is active.
    fn allowed_criteria(&self) -> &'static [SortCriterion];

    fn allows(&self, criterion: SortCriterion) -> bool {
        self.allowed_criteria().contains(&criterion)
    }
}

/// Every criterion that ranks catalog items.
const ITEM_CRITERIA: [SortCriterion; 8] = [
    SortCriterion::Default,
    SortCriterion::Alphabetical,
    SortCriterion::Mined,
    SortCriterion::Broken,
    SortCriterion::Crafted,
    SortCriterion::Used,
    SortCriterion::PickedUp,
    SortCriterion::Dropped,
];

const GENERAL_CRITERIA: [SortCriterion; 3] = [
    SortCriterion::Default,
    SortCriterion::Alphabetical,
    SortCriterion::Owner,
];

// ============================================================================
// Creative catalog
// ============================================================================

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
pub enum CreativeTab {
    BuildingBlocks,
    FunctionalBlocks,
    MobHeads,
    Cosmetics,
    Food,
    MinigameItems,
    OtherItems,
    /// Shows the whole catalog without filtering.
    All,
}

impl CreativeTab {
    /// True for the tab that applies no filter.
    pub const fn is_unfiltered(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Tab for CreativeTab {
    fn initial() -> Self {
        Self::All
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::BuildingBlocks => "Building Blocks",
            Self::FunctionalBlocks => "Functional Blocks",
            Self::MobHeads => "Mob Heads",
            Self::Cosmetics => "Cosmetics",
            Self::Food => "Food",
            Self::MinigameItems => "Minigame/Event Items",
            Self::OtherItems => "Other Items",
            Self::All => "All",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::BuildingBlocks => "cube",
            Self::FunctionalBlocks => "cube_special",
            Self::MobHeads => "villager",
            Self::Cosmetics => "tophat",
            Self::Food => "drumstick",
            Self::MinigameItems => "mini_flag",
            Self::OtherItems => "ingot",
            Self::All => "asterisk",
        }
    }

    fn allowed_criteria(&self) -> &'static [SortCriterion] {
        &ITEM_CRITERIA
    }
}

// ============================================================================
// Statistics screen
// ============================================================================

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
pub enum StatisticsTab {
    /// Registered general statistics followed by custom statistics.
    General,
    /// Catalog items with their built-in item statistics.
    Items,
}

impl Tab for StatisticsTab {
    fn initial() -> Self {
        Self::General
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General Stats",
            Self::Items => "Items",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::General => "heart",
            Self::Items => "ingot",
        }
    }

    fn allowed_criteria(&self) -> &'static [SortCriterion] {
        match self {
            Self::General => &GENERAL_CRITERIA,
            Self::Items => &ITEM_CRITERIA,
        }
    }
}

//! Static registrations for the browsing screens.

use browser::{CatalogItem, CreativeCatalog, CreativeTab};
use stats_core::{DisplayIcon, StatFormat};

/// An item placed on the creative screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreativePlacement {
    pub index: i32,
    pub item: CatalogItem,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tabs: Vec<CreativeTab>,
}

impl CreativePlacement {
    /// Builds a catalog from placements. Later placements win on index clashes.
    pub fn build_catalog(placements: impl IntoIterator<Item = CreativePlacement>) -> CreativeCatalog {
        let mut catalog = CreativeCatalog::new();
        for placement in placements {
            catalog.place(placement.item, placement.index, &placement.tabs);
        }
        catalog
    }
}

/// A host-tracked general statistic shown on the statistics screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPlacement {
    /// Host statistic id, e.g. `blackblock:votes`.
    pub stat_id: String,
    pub name: String,
    /// Item id used as the row icon.
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: StatFormat,
}

impl StatPlacement {
    pub fn display_icon(&self) -> DisplayIcon {
        DisplayIcon::item(self.icon.clone())
    }
}

//! Units the browser orders and slices.

use stats_core::DisplayIcon;

/// A statically registered catalog item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    /// Registry id, e.g. `blackblock:oak_table`.
    pub id: String,
    /// Display name used for alphabetical ordering.
    pub name: String,
    /// Block items are the only ones with a mined count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_block: bool,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_block: false,
        }
    }

    pub fn block(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_block: true,
            ..Self::new(id, name)
        }
    }
}

/// A statistic line computed for one viewing subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub name: String,
    /// Raw score for the viewing subject.
    pub value: i32,
    /// Score rendered with the statistic's number format.
    pub formatted: String,
    pub icon: DisplayIcon,
    /// Owner of a custom statistic. `None` for built-in statistics.
    pub owner: Option<String>,
}

impl StatRow {
    /// `"<name>: <formatted score>"`, as shown on the statistics screen.
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.formatted)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowsableEntry {
    Item(CatalogItem),
    Stat(StatRow),
}

impl BrowsableEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Stat(row) => &row.name,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::Item(_) => None,
            Self::Stat(row) => row.owner.as_deref(),
        }
    }

    pub fn as_item(&self) -> Option<&CatalogItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Stat(_) => None,
        }
    }

    pub fn as_stat(&self) -> Option<&StatRow> {
        match self {
            Self::Item(_) => None,
            Self::Stat(row) => Some(row),
        }
    }
}

impl From<CatalogItem> for BrowsableEntry {
    fn from(item: CatalogItem) -> Self {
        Self::Item(item)
    }
}

impl From<StatRow> for BrowsableEntry {
    fn from(row: StatRow) -> Self {
        Self::Stat(row)
    }
}

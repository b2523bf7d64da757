//! Statically registered creative catalog.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::entry::{BrowsableEntry, CatalogItem};
use crate::tab::CreativeTab;

/// Creative items keyed by placement index, with their tab memberships.
///
/// Built once at startup and read-only afterwards. The flattened order is
/// ascending placement index.
#[derive(Clone, Debug, Default)]
pub struct CreativeCatalog {
    placements: BTreeMap<i32, CatalogItem>,
    memberships: HashMap<CreativeTab, HashSet<String>>,
}

impl CreativeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `item` at `index` and adds it to `tabs`.
    ///
    /// An item already at `index` is replaced and returned. Listing
    /// [`CreativeTab::All`] is accepted and has no effect.
    pub fn place(&mut self, item: CatalogItem, index: i32, tabs: &[CreativeTab]) -> Option<CatalogItem> {
        for tab in tabs.iter().filter(|tab| !tab.is_unfiltered()) {
            self.memberships
                .entry(*tab)
                .or_default()
                .insert(item.id.clone());
        }
        self.placements.insert(index, item)
    }

    /// Returns true if `item_id` is shown on `tab`.
    pub fn in_tab(&self, tab: CreativeTab, item_id: &str) -> bool {
        if tab.is_unfiltered() {
            return self.get(item_id).is_some();
        }
        self.memberships
            .get(&tab)
            .is_some_and(|members| members.contains(item_id))
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.placements.values().find(|item| item.id == item_id)
    }

    /// Items in placement order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.placements.values()
    }

    /// Fresh browsable sequence in placement order.
    pub fn entries(&self) -> Vec<BrowsableEntry> {
        self.items().cloned().map(BrowsableEntry::Item).collect()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_by_index() {
        let mut catalog = CreativeCatalog::new();
        catalog.place(CatalogItem::new("test:c", "C"), 30, &[CreativeTab::Food]);
        catalog.place(CatalogItem::new("test:a", "A"), 10, &[CreativeTab::Cosmetics]);
        catalog.place(CatalogItem::new("test:b", "B"), 20, &[]);

        let ids: Vec<&str> = catalog.items().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["test:a", "test:b", "test:c"]);
    }

    #[test]
    fn tab_membership() {
        let mut catalog = CreativeCatalog::new();
        catalog.place(
            CatalogItem::block("test:table", "Table"),
            1,
            &[CreativeTab::FunctionalBlocks, CreativeTab::All],
        );

        assert!(catalog.in_tab(CreativeTab::FunctionalBlocks, "test:table"));
        assert!(catalog.in_tab(CreativeTab::All, "test:table"));
        assert!(!catalog.in_tab(CreativeTab::Food, "test:table"));
        assert!(!catalog.in_tab(CreativeTab::All, "test:missing"));
    }

    #[test]
    fn same_index_replaces() {
        let mut catalog = CreativeCatalog::new();
        assert!(catalog.place(CatalogItem::new("test:a", "A"), 1, &[]).is_none());
        let replaced = catalog.place(CatalogItem::new("test:b", "B"), 1, &[]);
        assert_eq!(replaced.map(|item| item.id), Some("test:a".to_string()));
        assert_eq!(catalog.len(), 1);
    }
}

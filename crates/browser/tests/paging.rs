use browser::{
    BrowsableEntry, BrowserState, CatalogItem, CreativeCatalog, CreativeTab,
    InMemoryStatOracle, ItemStatKind, PageRequest, PaginatedBrowser, SortCriterion, SortOrder,
    StatisticsTab,
};

fn ten_entries() -> Vec<BrowsableEntry> {
    (0..10)
        .map(|i| CatalogItem::new(format!("test:item_{i}"), format!("Item {i}")).into())
        .collect()
}

#[test]
fn ten_entries_in_pages_of_four() {
    let oracle = InMemoryStatOracle::new();
    let browser = PaginatedBrowser::new(4, &oracle);

    let sizes: Vec<(usize, usize)> = (1..=4)
        .map(|page| {
            let request = PageRequest::new(SortCriterion::Default, SortOrder::Descending, page);
            let page = browser.page_all(ten_entries(), &request, "alice");
            (page.entries.len(), page.total_pages)
        })
        .collect();

    assert_eq!(sizes, [(4, 3), (4, 3), (2, 3), (0, 3)]);
}

#[test]
fn default_descending_keeps_insertion_order() {
    let oracle = InMemoryStatOracle::new();
    let browser = PaginatedBrowser::new(4, &oracle);

    let page = browser.page_all(ten_entries(), &PageRequest::default(), "alice");
    let names: Vec<&str> = page.entries.iter().map(BrowsableEntry::name).collect();
    assert_eq!(names, ["Item 0", "Item 1", "Item 2", "Item 3"]);

    let request = PageRequest::new(SortCriterion::Default, SortOrder::Ascending, 1);
    let page = browser.page_all(ten_entries(), &request, "alice");
    assert_eq!(page.entries[0].name(), "Item 9");
}

#[test]
fn tab_filter_applies_before_paging() {
    let mut catalog = CreativeCatalog::new();
    for i in 0..6 {
        let tabs: &[CreativeTab] = if i % 2 == 0 {
            &[CreativeTab::Food]
        } else {
            &[CreativeTab::Cosmetics]
        };
        catalog.place(
            CatalogItem::new(format!("test:item_{i}"), format!("Item {i}")),
            i,
            tabs,
        );
    }

    let mut oracle = InMemoryStatOracle::new();
    oracle.record_item("alice", ItemStatKind::Used, "test:item_2", 7);

    let browser = PaginatedBrowser::new(2, &oracle);
    let request = PageRequest::first_page(SortCriterion::Used, SortOrder::Descending);
    let page = browser.page(
        catalog.entries(),
        |entry| {
            entry
                .as_item()
                .is_some_and(|item| catalog.in_tab(CreativeTab::Food, &item.id))
        },
        &request,
        "alice",
    );

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.entries[0].name(), "Item 2");
}

#[test]
fn changing_tab_or_criterion_resets_page() {
    let mut state = BrowserState::<StatisticsTab>::new();
    state.set_page(5);
    state.next_criterion();
    assert_eq!(state.page(), 1);

    state.set_page(5);
    state.select_tab(StatisticsTab::Items);
    assert_eq!(state.page(), 1);
}

#[test]
fn switching_tab_moves_criterion_forward_only() {
    let mut state = BrowserState::<StatisticsTab>::new();
    state.select_tab(StatisticsTab::Items);
    for _ in 0..7 {
        state.next_criterion();
    }
    assert_eq!(state.criterion(), SortCriterion::Dropped);

    // Dropped -> Owner is the first allowed member going forward.
    state.select_tab(StatisticsTab::General);
    assert_eq!(state.criterion(), SortCriterion::Owner);

    // Owner -> Default when returning to the item tab.
    state.select_tab(StatisticsTab::Items);
    assert_eq!(state.criterion(), SortCriterion::Default);
}

#[test]
fn allowed_criterion_survives_tab_switch() {
    let mut state = BrowserState::<StatisticsTab>::new();
    state.next_criterion();
    assert_eq!(state.criterion(), SortCriterion::Alphabetical);
    state.select_tab(StatisticsTab::Items);
    assert_eq!(state.criterion(), SortCriterion::Alphabetical);
}

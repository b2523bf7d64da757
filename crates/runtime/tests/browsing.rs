use std::fs;
use std::path::Path;

use browser::{
    BrowsableEntry, BrowserState, CatalogItem, CreativeCatalog, CreativeTab, InMemoryStatOracle, ItemStatKind, SortCriterion,
    SortOrder, StatisticsTab,
};
use runtime::{Caller, InMemoryRegistryRepository, Runtime, RuntimeConfig};

fn write_content(dir: &Path) {
    fs::write(
        dir.join("config.toml"),
        "creative_page_size = 2\nstatistics_page_size = 2\n",
    )
    .expect("write config");
    fs::write(
        dir.join("creative.ron"),
        r#"(
            placements: [
                (index: 0, item: (id: "blackblock:stone_bricks", name: "Stone Bricks", is_block: true),
                    tabs: [building_blocks]),
                (index: 1, item: (id: "blackblock:pie", name: "Pie"), tabs: [food]),
                (index: 2, item: (id: "blackblock:apple_tart", name: "Apple Tart"), tabs: [food]),
                (index: 3, item: (id: "blackblock:cake", name: "Cake"), tabs: [food]),
            ],
        )"#,
    )
    .expect("write catalog");
    fs::write(
        dir.join("statistics.ron"),
        r#"(
            statistics: [
                (stat_id: "blackblock:votes", name: "Votes", icon: "minecraft:paper"),
            ],
        )"#,
    )
    .expect("write placements");
}

fn runtime(dir: &Path, oracle: InMemoryStatOracle) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default().with_data_dir(dir))
        .repository(InMemoryRegistryRepository::new())
        .oracle(oracle)
        .build()
        .expect("runtime should build")
}

fn names(entries: &[BrowsableEntry]) -> Vec<&str> {
    entries.iter().map(BrowsableEntry::name).collect()
}

#[test]
fn creative_tabs_filter_then_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_content(dir.path());

    let mut oracle = InMemoryStatOracle::new();
    oracle.record_item("alice", ItemStatKind::Crafted, "blackblock:cake", 9);
    oracle.record_item("alice", ItemStatKind::Crafted, "blackblock:pie", 4);
    let runtime = runtime(dir.path(), oracle);
    assert_eq!(runtime.browser_config().creative_page_size(), 2);

    let mut state = BrowserState::<CreativeTab>::new();
    let all = runtime.creative_page(&state, "alice");
    assert_eq!(all.total_pages, 2);
    assert_eq!(names(&all.entries), ["Stone Bricks", "Pie"]);

    state.select_tab(CreativeTab::Food);
    while state.criterion() != SortCriterion::Crafted {
        state.next_criterion();
    }
    let food = runtime.creative_page(&state, "alice");
    assert_eq!(food.total_pages, 2);
    assert_eq!(names(&food.entries), ["Cake", "Pie"]);

    state.next_order();
    assert_eq!(state.order(), SortOrder::Ascending);
    let food = runtime.creative_page(&state, "alice");
    assert_eq!(names(&food.entries), ["Apple Tart", "Pie"]);

    state.set_page(3);
    assert!(runtime.creative_page(&state, "alice").is_empty());
}

#[test]
fn statistics_screen_lists_host_then_custom_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_content(dir.path());

    let mut oracle = InMemoryStatOracle::new();
    oracle.record_general("carol", "blackblock:votes", 12);
    let mut runtime = runtime(dir.path(), oracle);

    let console = Caller::console();
    let mut commands = runtime.commands();
    commands.create(&console, "zombies", "Zombies", "alice");
    commands.create(&console, "arrows", "Arrows", "bob");
    commands.players_set(&console, "arrows", &["carol"], 3);

    let mut state = BrowserState::<StatisticsTab>::new();
    let page = runtime.statistics_page(&state, "carol");
    assert_eq!(page.total_pages, 2);
    assert_eq!(names(&page.entries), ["Votes", "Arrows"]);
    assert_eq!(page.entries[0].as_stat().map(|row| row.label()).as_deref(), Some("Votes: 12"));
    assert_eq!(page.entries[1].owner(), Some("bob"));

    state.next_order();
    let page = runtime.statistics_page(&state, "carol");
    assert_eq!(names(&page.entries), ["Zombies", "Arrows"]);

    state.next_criterion();
    state.next_criterion();
    assert_eq!(state.criterion(), SortCriterion::Owner);
    state.set_page(2);
    let page = runtime.statistics_page(&state, "carol");
    assert_eq!(state.order(), SortOrder::Ascending);
    // Rows without an owner come first: Votes, Zombies (alice), Arrows (bob).
    assert_eq!(names(&page.entries), ["Arrows"]);

    state.select_tab(StatisticsTab::Items);
    assert_eq!(state.criterion(), SortCriterion::Default);
    let items = runtime.statistics_page(&state, "carol");
    assert_eq!(items.total_pages, 2);
}

#[test]
fn each_screen_pages_by_its_own_slot_count() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut catalog = CreativeCatalog::new();
    for i in 0..50 {
        let tabs = if i % 2 == 0 { vec![CreativeTab::Food] } else { Vec::new() };
        catalog.place(
            CatalogItem::new(format!("blackblock:item_{i}"), format!("Item {i}")),
            i,
            &tabs,
        );
    }
    let runtime = Runtime::builder()
        .config(RuntimeConfig::default().with_data_dir(dir.path()))
        .repository(InMemoryRegistryRepository::new())
        .catalog(catalog)
        .build()
        .expect("runtime should build");

    // Creative screen, unfiltered tab
    let mut creative = BrowserState::<CreativeTab>::new();
    creative.select_tab(CreativeTab::All);
    let page = runtime.creative_page(&creative, "alice");
    assert_eq!(page.entries.len(), 36);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.entries[0].name(), "Item 0");

    creative.set_page(2);
    assert_eq!(runtime.creative_page(&creative, "alice").entries.len(), 14);

    // Filtered tab
    creative.select_tab(CreativeTab::Food);
    let food = runtime.creative_page(&creative, "alice");
    assert_eq!(food.entries.len(), 25);
    assert_eq!(food.total_pages, 1);

    // Statistics screen, item tab
    let mut statistics = BrowserState::<StatisticsTab>::new();
    statistics.select_tab(StatisticsTab::Items);
    let items = runtime.statistics_page(&statistics, "alice");
    assert_eq!(items.entries.len(), 40);
    assert_eq!(items.total_pages, 2);
}

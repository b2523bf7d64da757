//! Browsable rows built from registry and host data.

use browser::{BrowsableEntry, CatalogItem, ItemStatKind, SortCriterion, StatOracle, StatRow};
use stats_content::StatPlacement;

use crate::registry::StatisticRegistry;

/// Order of the per-item lines on the statistics screen.
const ITEM_LINE_ORDER: [ItemStatKind; 6] = [
    ItemStatKind::Mined,
    ItemStatKind::Crafted,
    ItemStatKind::Used,
    ItemStatKind::Broken,
    ItemStatKind::PickedUp,
    ItemStatKind::Dropped,
];

/// Rows of the General statistics tab for `subject`.
///
/// Host statistics come first, then custom statistics. Under
/// [`SortCriterion::Default`] each group is put in alphabetical order here,
/// since the default criterion itself never reorders.
pub fn general_rows(
    placements: &[StatPlacement],
    registry: &StatisticRegistry,
    subject: &str,
    oracle: &dyn StatOracle,
    criterion: SortCriterion,
) -> Vec<BrowsableEntry> {
    let mut host_rows: Vec<StatRow> = placements
        .iter()
        .map(|placement| {
            let value = oracle.general_stat(subject, &placement.stat_id);
            StatRow {
                name: placement.name.clone(),
                value,
                formatted: placement.format.format(value),
                icon: placement.display_icon(),
                owner: None,
            }
        })
        .collect();

    let mut custom_rows: Vec<StatRow> = registry
        .list_all()
        .iter()
        .map(|statistic| StatRow {
            name: statistic.display_name().to_string(),
            value: statistic.get_score(subject),
            formatted: statistic.formatted_score(subject),
            icon: statistic.display_icon(),
            owner: Some(statistic.owner().to_string()),
        })
        .collect();

    if criterion == SortCriterion::Default {
        host_rows.sort_by(|a, b| a.name.cmp(&b.name));
        custom_rows.sort_by(|a, b| a.name.cmp(&b.name));
    }

    host_rows
        .into_iter()
        .chain(custom_rows)
        .map(BrowsableEntry::from)
        .collect()
}

/// `"<stat>: <value>"` lines describing one item for `subject`.
///
/// Mined reads 0 for items that are not blocks.
pub fn item_stat_lines(item: &CatalogItem, subject: &str, oracle: &dyn StatOracle) -> Vec<String> {
    ITEM_LINE_ORDER
        .iter()
        .map(|kind| {
            let value = if *kind == ItemStatKind::Mined && !item.is_block {
                0
            } else {
                oracle.item_stat(subject, *kind, &item.id)
            };
            format!("{}: {value}", kind.display_name())
        })
        .collect()
}

/// Tag shown under a custom statistic row.
pub fn owner_tag(row: &StatRow) -> Option<String> {
    row.owner
        .as_ref()
        .map(|owner| format!("Custom statistic [{owner}]"))
}

//! Sort criteria and their ordering rules.

use crate::entry::BrowsableEntry;
use crate::oracle::{ItemStatKind, StatOracle};
use crate::order::SortOrder;

/// Rank given to entries a numeric criterion does not apply to.
pub const NOT_APPLICABLE: i32 = -1;

/// Closed, cyclic set of sort criteria.
///
/// # Direction rules
///
/// - `Default` keeps the incoming sequence and reverses it only for
///   [`SortOrder::Ascending`]. The unsorted sequence already reads as
///   descending.
/// - Every other criterion stable-sorts lowest first, then reverses the
///   result for [`SortOrder::Descending`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortCriterion {
    #[default]
    Default,
    Alphabetical,
    Mined,
    Broken,
    Crafted,
    Used,
    PickedUp,
    Dropped,
    /// Statistic rows by owner name; rows without an owner come first.
    Owner,
}

impl SortCriterion {
    /// Cycle order used by `next`/`prev`. Independent of declaration order.
    pub const ALL: [SortCriterion; 9] = [
        SortCriterion::Default,
        SortCriterion::Alphabetical,
        SortCriterion::Mined,
        SortCriterion::Broken,
        SortCriterion::Crafted,
        SortCriterion::Used,
        SortCriterion::PickedUp,
        SortCriterion::Dropped,
        SortCriterion::Owner,
    ];

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|criterion| *criterion == self)
            .unwrap_or(0)
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Alphabetical => "Alphabetical",
            Self::Mined => "Times Mined",
            Self::Broken => "Times Broken",
            Self::Crafted => "Times Crafted",
            Self::Used => "Times Used",
            Self::PickedUp => "Picked Up",
            Self::Dropped => "Dropped",
            Self::Owner => "Owner",
        }
    }

    /// Overlay icon id. `Default` has none.
    pub const fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Alphabetical => Some("sort_alphabetical"),
            Self::Mined => Some("sort_mined"),
            Self::Broken => Some("sort_broken"),
            Self::Crafted => Some("sort_crafted"),
            Self::Used => Some("sort_used"),
            Self::PickedUp => Some("sort_picked_up"),
            Self::Dropped => Some("sort_dropped"),
            Self::Owner => Some("sort_owner"),
        }
    }

    /// The built-in item statistic this criterion ranks by, if any.
    pub const fn item_stat(&self) -> Option<ItemStatKind> {
        match self {
            Self::Mined => Some(ItemStatKind::Mined),
            Self::Broken => Some(ItemStatKind::Broken),
            Self::Crafted => Some(ItemStatKind::Crafted),
            Self::Used => Some(ItemStatKind::Used),
            Self::PickedUp => Some(ItemStatKind::PickedUp),
            Self::Dropped => Some(ItemStatKind::Dropped),
            Self::Default | Self::Alphabetical | Self::Owner => None,
        }
    }

    /// Orders `entries` in place for the viewing `subject`.
    pub fn sort(
        &self,
        entries: &mut [BrowsableEntry],
        order: SortOrder,
        subject: &str,
        oracle: &dyn StatOracle,
    ) {
        match self {
            Self::Default => {
                if order == SortOrder::Ascending {
                    entries.reverse();
                }
                return;
            }
            Self::Alphabetical => {
                entries.sort_by(|a, b| a.name().cmp(b.name()));
            }
            Self::Owner => {
                entries.sort_by(|a, b| a.owner().cmp(&b.owner()));
            }
            Self::Mined | Self::Broken | Self::Crafted | Self::Used | Self::PickedUp | Self::Dropped => {
                let kind = match self.item_stat() {
                    Some(kind) => kind,
                    None => return,
                };
                entries.sort_by_cached_key(|entry| item_rank(entry, kind, subject, oracle));
            }
        }

        if order == SortOrder::Descending {
            entries.reverse();
        }
    }
}

fn item_rank(
    entry: &BrowsableEntry,
    kind: ItemStatKind,
    subject: &str,
    oracle: &dyn StatOracle,
) -> i32 {
    match entry.as_item() {
        Some(item) if kind == ItemStatKind::Mined && !item.is_block => NOT_APPLICABLE,
        Some(item) => oracle.item_stat(subject, kind, &item.id),
        None => NOT_APPLICABLE,
    }
}

/// Icon shown for a statistic in browsing surfaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayIcon {
    /// A single item, referenced by its registry id.
    Item { item_id: String },
    /// The avatar head of a player. Used as the derived default (owner's head).
    PlayerHead { owner: String },
}

impl DisplayIcon {
    pub fn item(item_id: impl Into<String>) -> Self {
        Self::Item {
            item_id: item_id.into(),
        }
    }

    pub fn player_head(owner: impl Into<String>) -> Self {
        Self::PlayerHead {
            owner: owner.into(),
        }
    }

    /// Human-readable label, used by the `get` command output.
    pub fn label(&self) -> String {
        match self {
            Self::Item { item_id } => item_id.clone(),
            Self::PlayerHead { owner } => format!("{owner}'s Head"),
        }
    }
}

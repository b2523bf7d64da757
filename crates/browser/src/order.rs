/// Direction applied on top of a sort criterion.
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
pub enum SortOrder {
    Ascending,
    /// Initial order of every browsing surface.
    #[default]
    Descending,
}

impl SortOrder {
    /// Cycle order used by `next`/`prev`.
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Ascending => "sort_ascending",
            Self::Descending => "sort_descending",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Ascending => 0,
            Self::Descending => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_member_cycle() {
        assert_eq!(SortOrder::Ascending.next(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.next(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.prev(), SortOrder::Descending);
        assert_eq!(SortOrder::default().next().next(), SortOrder::default());
    }

    #[test]
    fn parses_names() {
        assert_eq!("DESCENDING".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!(SortOrder::Ascending.to_string(), "ascending");
    }
}

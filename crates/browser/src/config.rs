/// Browsing configuration.
///
/// Each screen has its own page size, matching its item slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrowserConfig {
    /// Entries per page on the creative screen.
    pub creative_page_size: usize,
    /// Entries per page on the statistics screen.
    pub statistics_page_size: usize,
}

impl BrowserConfig {
    pub const DEFAULT_CREATIVE_PAGE_SIZE: usize = 36;
    pub const DEFAULT_STATISTICS_PAGE_SIZE: usize = 40;

    pub const fn new(creative_page_size: usize, statistics_page_size: usize) -> Self {
        Self {
            creative_page_size,
            statistics_page_size,
        }
    }

    /// Same page size on every screen.
    pub const fn uniform(page_size: usize) -> Self {
        Self::new(page_size, page_size)
    }

    /// Creative page size clamped to at least one entry.
    pub fn creative_page_size(&self) -> usize {
        self.creative_page_size.max(1)
    }

    /// Statistics page size clamped to at least one entry.
    pub fn statistics_page_size(&self) -> usize {
        self.statistics_page_size.max(1)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CREATIVE_PAGE_SIZE,
            Self::DEFAULT_STATISTICS_PAGE_SIZE,
        )
    }
}

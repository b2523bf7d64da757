//! Filter, sort and slice.

use crate::criterion::SortCriterion;
use crate::entry::BrowsableEntry;
use crate::oracle::StatOracle;
use crate::order::SortOrder;

/// Sort settings and page number for one view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub criterion: SortCriterion,
    pub order: SortOrder,
    /// 1-based. Zero is treated as the first page.
    pub page: usize,
}

impl PageRequest {
    pub const fn new(criterion: SortCriterion, order: SortOrder, page: usize) -> Self {
        Self {
            criterion,
            order,
            page,
        }
    }

    pub fn first_page(criterion: SortCriterion, order: SortOrder) -> Self {
        Self::new(criterion, order, 1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first_page(SortCriterion::Default, SortOrder::Descending)
    }
}

/// One page of ordered entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<BrowsableEntry>,
    /// The page that was requested, after clamping to at least 1.
    pub page: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `count` entries. Zero entries need zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Generic page builder shared by the creative and statistics screens.
pub struct PaginatedBrowser<'a> {
    page_size: usize,
    oracle: &'a dyn StatOracle,
}

impl<'a> PaginatedBrowser<'a> {
    /// `page_size` is clamped to at least one entry.
    pub fn new(page_size: usize, oracle: &'a dyn StatOracle) -> Self {
        Self {
            page_size: page_size.max(1),
            oracle,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Keeps entries accepted by `filter`, orders them for `subject`, and
    /// returns the requested page.
    ///
    /// A page past the end yields an empty slice, not an error.
    pub fn page<F>(
        &self,
        entries: Vec<BrowsableEntry>,
        filter: F,
        request: &PageRequest,
        subject: &str,
    ) -> Page
    where
        F: Fn(&BrowsableEntry) -> bool,
    {
        let mut entries: Vec<BrowsableEntry> = entries.into_iter().filter(|e| filter(e)).collect();
        request
            .criterion
            .sort(&mut entries, request.order, subject, self.oracle);
        self.slice(entries, request.page)
    }

    /// Same as [`page`](Self::page) with no tab filter.
    pub fn page_all(&self, entries: Vec<BrowsableEntry>, request: &PageRequest, subject: &str) -> Page {
        self.page(entries, |_| true, request, subject)
    }

    /// Cuts `[start, end)` out of already ordered entries.
    pub fn slice(&self, entries: Vec<BrowsableEntry>, page: usize) -> Page {
        let page = page.max(1);
        let count = entries.len();
        let start = (page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(count);

        let entries = if start >= count {
            Vec::new()
        } else {
            entries.into_iter().skip(start).take(end - start).collect()
        };

        Page {
            entries,
            page,
            total_pages: total_pages(count, self.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::CatalogItem;
    use crate::oracle::InMemoryStatOracle;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 40), 0);
        assert_eq!(total_pages(40, 40), 1);
        assert_eq!(total_pages(41, 40), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn page_zero_is_first_page() {
        let oracle = InMemoryStatOracle::new();
        let browser = PaginatedBrowser::new(2, &oracle);
        let entries = (0..3)
            .map(|i| CatalogItem::new(format!("test:{i}"), format!("{i}")).into())
            .collect();

        let page = browser.slice(entries, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.entries.len(), 2);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }
}

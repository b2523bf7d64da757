//! Selection state of one open browsing screen.

use crate::browser::PageRequest;
use crate::criterion::SortCriterion;
use crate::order::SortOrder;
use crate::tab::Tab;

/// Active tab, sort settings and page of a browsing screen.
///
/// Any change to tab, criterion or order resets the page to 1. Switching
/// tabs moves the criterion forward with `next()` until the new tab allows
/// it; `prev()` is never consulted, so the landing criterion only depends on
/// the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserState<T: Tab> {
    tab: T,
    criterion: SortCriterion,
    order: SortOrder,
    page: usize,
}

impl<T: Tab> BrowserState<T> {
    pub fn new() -> Self {
        Self {
            tab: T::initial(),
            criterion: SortCriterion::Default,
            order: SortOrder::Descending,
            page: 1,
        }
    }

    pub fn tab(&self) -> T {
        self.tab
    }

    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn select_tab(&mut self, tab: T) {
        self.tab = tab;
        self.page = 1;
        if !tab.allows(self.criterion) {
            self.criterion = self.step_criterion(SortCriterion::next);
        }
    }

    pub fn next_criterion(&mut self) {
        self.criterion = self.step_criterion(SortCriterion::next);
        self.page = 1;
    }

    pub fn prev_criterion(&mut self) {
        self.criterion = self.step_criterion(SortCriterion::prev);
        self.page = 1;
    }

    /// Selects `criterion` directly if the active tab allows it.
    pub fn select_criterion(&mut self, criterion: SortCriterion) -> bool {
        if !self.tab.allows(criterion) {
            return false;
        }
        self.criterion = criterion;
        self.page = 1;
        true
    }

    pub fn select_order(&mut self, order: SortOrder) {
        self.order = order;
        self.page = 1;
    }

    pub fn next_order(&mut self) {
        self.order = self.order.next();
        self.page = 1;
    }

    pub fn prev_order(&mut self) {
        self.order = self.order.prev();
        self.page = 1;
    }

    /// Jumps to `page`. Values below 1 select the first page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.criterion, self.order, self.page)
    }

    /// Steps at least once and keeps stepping until the tab allows the
    /// criterion. Stays put if the tab allows nothing.
    fn step_criterion(&self, step: fn(SortCriterion) -> SortCriterion) -> SortCriterion {
        let mut candidate = self.criterion;
        for _ in 0..SortCriterion::ALL.len() {
            candidate = step(candidate);
            if self.tab.allows(candidate) {
                return candidate;
            }
        }
        self.criterion
    }
}

impl<T: Tab> Default for BrowserState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{CreativeTab, StatisticsTab};

    #[test]
    fn opens_on_first_page_descending() {
        let state = BrowserState::<CreativeTab>::new();
        assert_eq!(state.tab(), CreativeTab::All);
        assert_eq!(state.criterion(), SortCriterion::Default);
        assert_eq!(state.order(), SortOrder::Descending);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn criterion_cycle_skips_disallowed() {
        let mut state = BrowserState::<StatisticsTab>::new();
        state.next_criterion();
        assert_eq!(state.criterion(), SortCriterion::Alphabetical);
        state.next_criterion();
        assert_eq!(state.criterion(), SortCriterion::Owner);
        state.next_criterion();
        assert_eq!(state.criterion(), SortCriterion::Default);
        state.prev_criterion();
        assert_eq!(state.criterion(), SortCriterion::Owner);
    }

    #[test]
    fn order_change_resets_page() {
        let mut state = BrowserState::<CreativeTab>::new();
        state.set_page(3);
        state.next_order();
        assert_eq!(state.order(), SortOrder::Ascending);
        assert_eq!(state.page(), 1);

        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn direct_selection_respects_allow_list() {
        let mut state = BrowserState::<StatisticsTab>::new();
        state.set_page(4);
        assert!(!state.select_criterion(SortCriterion::Mined));
        assert_eq!(state.page(), 4);

        assert!(state.select_criterion(SortCriterion::Owner));
        assert_eq!(state.criterion(), SortCriterion::Owner);
        assert_eq!(state.page(), 1);
    }
}

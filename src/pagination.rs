// SPDX-License-Identifier: MPL-2.0
//! Page-window arithmetic for paginated listings.
//!
//! [`page_window`] shapes the bounded row of page buttons shown under a
//! listing: every page when there are few of them, otherwise the first and
//! last page around a short run centred on the current page, with ellipsis
//! markers where pages are skipped.
//!
//! [`PageState`] owns the current page of a listing and decides whether a
//! page-switch request is honoured.

use std::fmt;

/// Maximum number of numeric slots shown once a listing exceeds it.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// One slot of the page switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

impl PageEntry {
    /// Returns the page number, or `None` for an ellipsis marker.
    #[must_use]
    pub fn page(self) -> Option<u32> {
        match self {
            PageEntry::Page(page) => Some(page),
            PageEntry::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(page) => write!(f, "{page}"),
            PageEntry::Ellipsis => write!(f, "..."),
        }
    }
}

/// Computes the page entries to render for `current_page` out of `total_pages`.
///
/// Both inputs are 1-indexed. A `total_pages` of zero is treated as one page.
#[must_use]
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    let total_pages = total_pages.max(1);

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut entries = vec![PageEntry::Page(1)];

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = (current_page + 1).min(total_pages - 1);

    // Anchor the run near the first page
    if current_page <= 3 {
        end = (total_pages - 1).min(MAX_VISIBLE_PAGES - 1);
    }

    // Anchor the run near the last page
    if current_page >= total_pages - 2 {
        start = (total_pages + 2 - MAX_VISIBLE_PAGES).max(2);
    }

    if start > 2 {
        entries.push(PageEntry::Ellipsis);
    }

    entries.extend((start..=end).map(PageEntry::Page));

    if end < total_pages - 1 {
        entries.push(PageEntry::Ellipsis);
    }

    entries.push(PageEntry::Page(total_pages));
    entries
}

/// Number of pages needed for `total_count` items, never less than one.
#[must_use]
pub fn total_pages_for(total_count: u32, page_size: u32) -> u32 {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// Current page of a listing plus the number of pages the API reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: u32,
    total: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Handles a page-switch request.
    ///
    /// Returns `false` and leaves the state untouched when `page` is the
    /// current page or lies outside `1..=total`. Callers reset the scroll
    /// position and refetch only when this returns `true`.
    pub fn request(&mut self, page: u32) -> bool {
        if page == self.current || page < 1 || page > self.total {
            return false;
        }
        self.current = page;
        true
    }

    /// Records the page count derived from a fresh response.
    pub fn set_total(&mut self, total: u32) {
        self.total = total.max(1);
    }

    /// Returns to the first page, e.g. after the filters changed.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Page entries for the switcher at the current position.
    #[must_use]
    pub fn window(&self) -> Vec<PageEntry> {
        page_window(self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::PageEntry::{Ellipsis, Page};
    use super::*;

    fn numbers(entries: &[PageEntry]) -> Vec<u32> {
        entries.iter().filter_map(|e| e.page()).collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        for total in 1..=MAX_VISIBLE_PAGES {
            for current in 1..=total {
                let expected: Vec<PageEntry> = (1..=total).map(Page).collect();
                assert_eq!(page_window(current, total), expected);
            }
        }
    }

    #[test]
    fn single_page_yields_only_page_one() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn six_pages_never_duplicate_neighbours() {
        assert_eq!(
            page_window(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            page_window(4, 6),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn window_invariants_hold_for_large_ranges() {
        for total in 6..=40 {
            for current in 1..=total {
                let entries = page_window(current, total);
                let pages = numbers(&entries);

                assert_eq!(entries.first(), Some(&Page(1)));
                assert_eq!(entries.last(), Some(&Page(total)));
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{entries:?}");
                assert!(pages.iter().all(|&p| (1..=total).contains(&p)));
                assert!(pages.contains(&current), "current {current} of {total}");

                let ellipses = entries.iter().filter(|e| **e == Ellipsis).count();
                assert!(ellipses <= 2);
                assert!(!entries.windows(2).any(|w| w[0] == Ellipsis && w[1] == Ellipsis));
            }
        }
    }

    #[test]
    fn calculator_is_idempotent() {
        assert_eq!(page_window(7, 23), page_window(7, 23));
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages_for(0, 20), 1);
        assert_eq!(total_pages_for(20, 20), 1);
        assert_eq!(total_pages_for(21, 20), 2);
        assert_eq!(total_pages_for(17_000, 20), 850);
        assert_eq!(total_pages_for(5, 0), 5);
    }

    #[test]
    fn request_rejects_current_and_out_of_range_pages() {
        let mut state = PageState::new();
        state.set_total(4);

        assert!(!state.request(1));
        assert!(!state.request(0));
        assert!(!state.request(5));
        assert_eq!(state.current(), 1);

        assert!(state.request(3));
        assert_eq!(state.current(), 3);
        assert!(state.has_previous());
        assert!(state.has_next());

        assert!(state.request(4));
        assert!(!state.has_next());
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut state = PageState::new();
        state.set_total(9);
        state.request(6);
        state.reset();
        assert_eq!(state.current(), 1);
        assert!(!state.has_previous());
    }

    #[test]
    fn ellipsis_displays_as_three_dots() {
        assert_eq!(Ellipsis.to_string(), "...");
        assert_eq!(Page(12).to_string(), "12");
    }
}

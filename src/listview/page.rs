//! Page windows over a filtered, sorted candidate list.
//!
//! Pagination is a pure slice: the visible window for page `p` is
//! `candidates[(p - 1) * size .. p * size]`. The engine reports the window
//! and the derived page totals but does not clamp an out-of-range page;
//! keeping the page within `1..=total_pages` is the caller's contract and
//! [`super::query::ListViewState`] upholds it by resetting to page 1 on any
//! search or filter change.

/// The caller-supplied page position: current page (1-based) and fixed
/// page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page number, starting at 1.
    pub current_page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl PageWindow {
    /// Creates a window positioned on page 1.
    #[must_use]
    pub const fn first(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }
}

/// Derived page state for the current query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based), as supplied by the caller.
    current_page: usize,
    /// Records per page.
    page_size: usize,
    /// Total pages; at least 1 even for an empty result set.
    total_pages: usize,
    /// Number of records across all pages.
    total_count: usize,
}

impl PageInfo {
    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the total number of pages, never less than 1.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the total record count across all pages.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns true when the current page is the first.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Returns true when the current page is the last.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// Computes the total page count for a result of `count` records.
///
/// Always at least 1: an empty result renders as one empty page, never
/// zero pages. A zero page size degenerates to a single page.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    let pages = count.div_ceil(page_size);
    if pages == 0 { 1 } else { pages }
}

/// Slices the visible window for the supplied page out of `candidates`.
///
/// A page beyond `total_pages` yields an empty window; it is not clamped
/// here (see the module documentation for the caller contract).
#[must_use]
pub fn paginate(candidates: &[usize], window: PageWindow) -> (Vec<usize>, PageInfo) {
    let info = PageInfo {
        current_page: window.current_page,
        page_size: window.page_size,
        total_pages: total_pages(candidates.len(), window.page_size),
        total_count: candidates.len(),
    };

    // An offset past usize::MAX is as far out of range as one past the
    // last page; both yield the empty window.
    let start = window
        .current_page
        .saturating_sub(1)
        .checked_mul(window.page_size)
        .unwrap_or(usize::MAX);
    let end = start.saturating_add(window.page_size).min(candidates.len());
    let visible = candidates.get(start..end).unwrap_or(&[]).to_vec();
    (visible, info)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PageWindow, paginate, total_pages};

    #[rstest]
    #[case(0, 5, 1)]
    #[case(1, 5, 1)]
    #[case(5, 5, 1)]
    #[case(6, 5, 2)]
    #[case(8, 5, 2)]
    #[case(20, 10, 2)]
    fn total_pages_rounds_up_and_never_hits_zero(
        #[case] count: usize,
        #[case] page_size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(total_pages(count, page_size), expected);
    }

    #[test]
    fn first_page_takes_the_leading_window() {
        let candidates: Vec<usize> = (0..8).collect();
        let (visible, info) = paginate(&candidates, PageWindow::first(5));
        assert_eq!(visible, vec![0, 1, 2, 3, 4]);
        assert_eq!(info.total_pages(), 2);
        assert!(info.is_first_page());
        assert!(!info.is_last_page());
    }

    #[test]
    fn last_page_is_the_remainder() {
        let candidates: Vec<usize> = (0..8).collect();
        let window = PageWindow {
            current_page: 2,
            page_size: 5,
        };
        let (visible, info) = paginate(&candidates, window);
        assert_eq!(visible, vec![5, 6, 7]);
        assert!(info.is_last_page());
    }

    #[test]
    fn out_of_range_page_yields_an_empty_window() {
        let candidates: Vec<usize> = (0..3).collect();
        let window = PageWindow {
            current_page: 5,
            page_size: 5,
        };
        let (visible, info) = paginate(&candidates, window);
        assert!(visible.is_empty());
        assert_eq!(info.total_pages(), 1);
    }

    #[test]
    fn page_number_at_usize_max_yields_an_empty_window() {
        let candidates: Vec<usize> = (0..8).collect();
        let window = PageWindow {
            current_page: usize::MAX,
            page_size: 10,
        };
        let (visible, info) = paginate(&candidates, window);
        assert!(visible.is_empty());
        assert_eq!(info.current_page(), usize::MAX);
        assert_eq!(info.total_pages(), 1);
    }

    #[test]
    fn pages_cover_the_candidates_exactly_once() {
        let candidates: Vec<usize> = (0..23).collect();
        let page_size = 10;
        let mut reassembled = Vec::new();
        for page in 1..=total_pages(candidates.len(), page_size) {
            let window = PageWindow {
                current_page: page,
                page_size,
            };
            let (visible, _) = paginate(&candidates, window);
            reassembled.extend(visible);
        }
        assert_eq!(reassembled, candidates);
    }

    #[test]
    fn empty_candidates_render_a_single_empty_page() {
        let (visible, info) = paginate(&[], PageWindow::first(10));
        assert!(visible.is_empty());
        assert_eq!(info.total_pages(), 1);
        assert_eq!(info.total_count(), 0);
    }
}

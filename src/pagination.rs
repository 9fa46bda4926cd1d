//! Pure pagination math for the landing page.
//!
//! Nothing here fails: a page number outside `1..=total_pages` just turns
//! the matching navigation control off.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Posts per landing page.
pub const PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => panic!("page size must be positive"),
};

/// Compute the number of pages for a paginated list.
pub fn total_pages(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Navigation state for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub total_pages: usize,
    pub current_page: i64,
    pub prev_page: Option<i64>,
    pub next_page: i64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

/// Derive navigation state from a total item count.
///
/// `current_page` is 1-based and taken as given.
pub fn paginate(total_count: usize, page_size: NonZeroUsize, current_page: i64) -> PaginationState {
    let total_pages = total_pages(total_count, page_size);
    let prev_page = (current_page > 1).then(|| current_page - 1);
    let next_page = current_page.saturating_add(1);

    PaginationState {
        total_pages,
        current_page,
        prev_page,
        next_page,
        has_prev_page: prev_page.is_some_and(|page| page >= 1),
        has_next_page: next_page <= i64::try_from(total_pages).unwrap_or(i64::MAX),
    }
}

/// Which page-number controls to show between Prev and Next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNav {
    /// Shortcut back to page 1.
    pub show_first: bool,
    /// `Page X of Y` label.
    pub label: Option<String>,
    /// Shortcut to the last page.
    pub show_last: bool,
}

impl PageNav {
    /// Page-number controls for `state`.
    ///
    /// With fewer than two pages nothing is shown. The first/last shortcuts
    /// only appear in the middle of the range, where neither Prev nor Next
    /// already lands on them.
    pub fn for_state(state: &PaginationState) -> Self {
        let total = i64::try_from(state.total_pages).unwrap_or(i64::MAX);
        if total < 2 {
            return Self {
                show_first: false,
                label: None,
                show_last: false,
            };
        }

        let current = state.current_page;
        let in_middle = current != 1 && current != total;
        Self {
            show_first: in_middle,
            label: Some(format!("Page {current} of {total}")),
            show_last: in_middle,
        }
    }
}

/// Slice of a result set backing one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub limit: usize,
}

impl PageWindow {
    /// Window for a 1-based page. Pages below 1 select the first window.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to >= 1
    pub fn for_page(page: i64, page_size: NonZeroUsize) -> Self {
        let index = (page.max(1) - 1) as usize;
        Self {
            skip: index.saturating_mul(page_size.get()),
            limit: page_size.get(),
        }
    }

    /// Apply the window to a slice.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_first_of_many() {
        let state = paginate(95, PAGE_SIZE, 1);
        assert_eq!(state.total_pages, 10);
        assert!(!state.has_prev_page);
        assert!(state.has_next_page);
        assert_eq!(state.prev_page, None);
        assert_eq!(state.next_page, 2);
    }

    #[test]
    fn test_last_page() {
        let state = paginate(95, PAGE_SIZE, 10);
        assert!(!state.has_next_page);
        assert!(state.has_prev_page);
        assert_eq!(state.prev_page, Some(9));
    }

    #[test]
    fn test_no_items() {
        let state = paginate(0, PAGE_SIZE, 1);
        assert_eq!(state.total_pages, 0);
        assert!(!state.has_next_page);
        assert!(!state.has_prev_page);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(paginate(100, PAGE_SIZE, 1).total_pages, 10);
        assert_eq!(paginate(101, PAGE_SIZE, 1).total_pages, 11);
        assert_eq!(paginate(7, size(3), 1).total_pages, 3);
    }

    #[test]
    fn test_out_of_range_pages_degrade() {
        let below = paginate(95, PAGE_SIZE, 0);
        assert!(!below.has_prev_page);
        assert!(below.has_next_page);

        let negative = paginate(95, PAGE_SIZE, -3);
        assert_eq!(negative.prev_page, None);
        assert!(negative.has_next_page);

        let past = paginate(95, PAGE_SIZE, 15);
        assert!(past.has_prev_page);
        assert_eq!(past.prev_page, Some(14));
        assert!(!past.has_next_page);
    }

    #[test]
    fn test_state_json_shape() {
        let json = serde_json::to_value(paginate(95, PAGE_SIZE, 1)).unwrap();
        assert_eq!(json["totalPages"], 10);
        assert_eq!(json["prevPage"], serde_json::Value::Null);
        assert_eq!(json["hasNextPage"], true);
    }

    #[test]
    fn test_nav_single_page() {
        let nav = PageNav::for_state(&paginate(5, PAGE_SIZE, 1));
        assert_eq!(nav.label, None);
        assert!(!nav.show_first && !nav.show_last);
    }

    #[test]
    fn test_nav_edges_hide_shortcuts() {
        let first = PageNav::for_state(&paginate(95, PAGE_SIZE, 1));
        assert_eq!(first.label.as_deref(), Some("Page 1 of 10"));
        assert!(!first.show_first && !first.show_last);

        let last = PageNav::for_state(&paginate(95, PAGE_SIZE, 10));
        assert_eq!(last.label.as_deref(), Some("Page 10 of 10"));
        assert!(!last.show_first && !last.show_last);
    }

    #[test]
    fn test_nav_middle_shows_shortcuts() {
        let nav = PageNav::for_state(&paginate(95, PAGE_SIZE, 4));
        assert_eq!(nav.label.as_deref(), Some("Page 4 of 10"));
        assert!(nav.show_first && nav.show_last);
    }

    #[test]
    fn test_window() {
        let items: Vec<u32> = (0..25).collect();

        let first = PageWindow::for_page(1, PAGE_SIZE);
        assert_eq!(first, PageWindow { skip: 0, limit: 10 });
        assert_eq!(first.apply(&items), &items[0..10]);

        assert_eq!(PageWindow::for_page(3, PAGE_SIZE).apply(&items), &items[20..25]);
        assert!(PageWindow::for_page(4, PAGE_SIZE).apply(&items).is_empty());
        assert_eq!(PageWindow::for_page(0, PAGE_SIZE), first);
    }
}

//! Page-count and page-window arithmetic.
//!
//! Pages are 1-based. A page beyond the last one yields an empty window
//! anchored at `total_items`; callers decide whether to navigate away.

use crate::types::page::PageWindow;

/// Number of pages needed to show `total_items` at `per_page` items each.
///
/// Zero items means zero pages. A `per_page` of zero is treated as one.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// Computes the window shown on `current_page`.
///
/// `current_page` is clamped to at least 1. The window never extends past
/// `total_items` and never holds more than `per_page` items.
pub fn window(total_items: usize, per_page: usize, current_page: usize) -> PageWindow {
    let per_page = per_page.max(1);
    let page = current_page.max(1);
    let index_start = (page - 1).saturating_mul(per_page).min(total_items);
    let index_end = index_start.saturating_add(per_page).min(total_items);

    PageWindow {
        index_start,
        index_end,
        page_count: page_count(total_items, per_page),
    }
}

/// The last page that holds any items, never less than 1.
pub fn last_page(total_items: usize, per_page: usize) -> usize {
    page_count(total_items, per_page).max(1)
}

use serde::Serialize;

/// Boundaries of one page of a paginated collection.
///
/// `index_start..index_end` is the half-open range of absolute positions
/// shown on the page. Recomputed on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub index_start: usize,
    pub index_end: usize,
    pub page_count: usize,
}

impl PageWindow {
    /// Number of items inside the window.
    pub fn len(&self) -> usize {
        self.index_end - self.index_start
    }

    pub fn is_empty(&self) -> bool {
        self.index_start == self.index_end
    }
}

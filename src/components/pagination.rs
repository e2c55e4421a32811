//! Pagination presenter: Prev, one link per page, Next.
//!
//! Navigation happens purely through the `#/<page>` link targets; the
//! presenter registers no handlers.

use serde::Serialize;

use super::container::Container;
use crate::services::pager;
use crate::types::route::Route;

/// One rendered pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    /// Page the control navigates to.
    pub target: usize,
    pub disabled: bool,
    pub active: bool,
}

impl PageLink {
    fn to_html(&self) -> String {
        let class = if self.disabled {
            " class=\"is-disabled\""
        } else if self.active {
            " class=\"is-active\""
        } else {
            ""
        };
        format!(
            "<li{}><a href=\"{}\">{}</a></li>",
            class,
            Route::Index(self.target).to_hash(),
            self.label
        )
    }
}

/// Computes the controls for `current_page` of `total_items`.
pub fn page_links(total_items: usize, current_page: usize, items_per_page: usize) -> Vec<PageLink> {
    let total_pages = pager::page_count(total_items, items_per_page);
    let mut links = Vec::with_capacity(total_pages + 2);

    links.push(PageLink {
        label: "Prev".to_string(),
        target: if current_page > 1 { current_page - 1 } else { 1 },
        disabled: current_page <= 1 || total_items == 0,
        active: false,
    });

    links.extend((1..=total_pages).map(|page| PageLink {
        label: page.to_string(),
        target: page,
        disabled: false,
        active: page == current_page,
    }));

    links.push(PageLink {
        label: "Next".to_string(),
        // An empty collection has no pages; point at page 1 rather than 0.
        target: if current_page < total_pages {
            current_page + 1
        } else {
            total_pages.max(1)
        },
        disabled: current_page >= total_pages || total_items == 0,
        active: false,
    });

    links
}

#[derive(Debug, Default)]
pub struct PaginationPresenter;

impl PaginationPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Replaces `container` with the pagination list.
    pub fn render(
        &self,
        container: &mut Container,
        total_items: usize,
        current_page: usize,
        items_per_page: usize,
    ) {
        let items: String = page_links(total_items, current_page, items_per_page)
            .iter()
            .map(PageLink::to_html)
            .collect();
        container.set_inner_html(format!("<ul class=\"pagination\">{}</ul>", items));
    }
}

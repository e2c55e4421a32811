//! Page views composed from the presenters.

use super::add_form::{AddBookmarkForm, AddHandler};
use super::bookmark_list::{BookmarkListPresenter, DeleteHandler, EntryAction, ListHandler, SaveHandler};
use super::container::Container;
use super::html::escape;
use super::pagination::PaginationPresenter;
use super::Key;
use crate::services::pager;
use crate::services::url_validation::url_without_protocol;

/// Everything the index view needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct IndexState<'a> {
    pub bookmarks: &'a [String],
    pub per_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

/// The add form, the current page of bookmarks and the pagination controls.
pub struct IndexPage {
    form: AddBookmarkForm,
    list: BookmarkListPresenter,
    pagination: PaginationPresenter,
    form_container: Container,
    list_container: Container,
    pagination_container: Container,
}

impl Default for IndexPage {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPage {
    pub fn new() -> Self {
        Self {
            form: AddBookmarkForm::new(),
            list: BookmarkListPresenter::new(),
            pagination: PaginationPresenter::new(),
            form_container: Container::new("addbookmark"),
            list_container: Container::new("bookmarks"),
            pagination_container: Container::new("pagination"),
        }
    }

    pub fn render(&mut self, state: IndexState<'_>) {
        self.form.render(&mut self.form_container);
        self.update_bookmarks(state.bookmarks, state.per_page, state.current_page);
    }

    /// Re-renders the list and pagination from a fresh collection snapshot.
    pub fn update_bookmarks(&mut self, bookmarks: &[String], per_page: usize, current_page: usize) {
        let window = pager::window(bookmarks.len(), per_page, current_page);
        self.list
            .render(&mut self.list_container, bookmarks, window.index_start, per_page);
        self.pagination.render(
            &mut self.pagination_container,
            bookmarks.len(),
            current_page,
            per_page,
        );
    }

    pub fn bind_update_bookmark(&mut self, handler: SaveHandler) {
        self.list.register_handler(ListHandler::Save(handler));
    }

    pub fn bind_delete_bookmark(&mut self, handler: DeleteHandler) {
        self.list.register_handler(ListHandler::Delete(handler));
    }

    pub fn bind_add_bookmark(&mut self, handler: AddHandler) {
        self.form.register_handler(handler);
    }

    pub fn dispatch_entry(&mut self, position: usize, action: EntryAction) -> bool {
        self.list.dispatch(&mut self.list_container, position, action)
    }

    pub fn add_input(&mut self, text: &str) {
        self.form.input(&mut self.form_container, text);
    }

    pub fn add_submit(&mut self) -> bool {
        self.form.submit(&mut self.form_container)
    }

    pub fn add_key_up(&mut self, key: Key) -> bool {
        self.form.key_up(&mut self.form_container, key)
    }

    pub fn list(&self) -> &BookmarkListPresenter {
        &self.list
    }

    pub fn form(&self) -> &AddBookmarkForm {
        &self.form
    }

    pub fn containers(&self) -> [&Container; 3] {
        [&self.form_container, &self.list_container, &self.pagination_container]
    }

    pub fn list_html(&self) -> &str {
        self.list_container.inner_html()
    }

    pub fn pagination_html(&self) -> &str {
        self.pagination_container.inner_html()
    }
}

/// Confirmation shown after a bookmark was added.
pub struct SubmittedPage {
    container: Container,
}

impl Default for SubmittedPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmittedPage {
    pub fn new() -> Self {
        Self {
            container: Container::new("submitted"),
        }
    }

    pub fn render(&mut self, last_bookmark: Option<&str>) {
        let body = match last_bookmark {
            Some(url) => format!(
                "<h2 class=\"memo_title\">Bookmark submitted</h2>\
<a class=\"memo_link\" href=\"{}\" target=\"_blank\">{}</a>",
                escape(url),
                escape(url_without_protocol(url))
            ),
            None => "<h2 class=\"memo_title\">Nothing submitted yet</h2>".to_string(),
        };
        self.container.set_inner_html(format!(
            "<div class=\"memo\">{}<a class=\"button\" href=\"#/\">Back to bookmarks</a></div>",
            body
        ));
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn html(&self) -> &str {
        self.container.inner_html()
    }
}

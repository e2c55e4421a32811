//! Bookmark list presenter.
//!
//! Renders one page of bookmarks as interactive entries. Each render rebuilds
//! the entry arena from the collection it is given, so positions are always
//! the bookmarks' current indices; nothing survives from a previous render.
//!
//! Per-entry state machine: `Viewing` (initial) and `Editing`. Edit toggles,
//! cancel returns to viewing, save (button or Enter in the edit field)
//! validates the URL and either commits or flags the entry as invalid.

use log::debug;

use super::container::Container;
use super::html::escape;
use super::Key;
use crate::services::list_window;
use crate::services::url_validation::{url_without_protocol, validate_url};

/// Called with `(position, new_url)` after a valid edit is saved.
pub type SaveHandler = Box<dyn FnMut(usize, &str)>;
/// Called with the position of the entry whose delete control was used.
pub type DeleteHandler = Box<dyn FnMut(usize)>;

/// A handler for one of the list's named events.
pub enum ListHandler {
    Save(SaveHandler),
    Delete(DeleteHandler),
}

#[derive(Default)]
struct ListHandlers {
    on_save: Option<SaveHandler>,
    on_delete: Option<DeleteHandler>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Viewing,
    Editing,
}

/// User interaction with a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    Edit,
    Cancel,
    /// The edit field's text changed.
    Input(String),
    Save,
    /// A key was released while the edit field had focus.
    KeyUp(Key),
    Delete,
}

impl EntryAction {
    /// Maps a `data-action` button name to its action.
    pub fn from_button(name: &str) -> Option<Self> {
        match name {
            "edit" => Some(EntryAction::Edit),
            "cancel" => Some(EntryAction::Cancel),
            "save" => Some(EntryAction::Save),
            "delete" => Some(EntryAction::Delete),
            _ => None,
        }
    }
}

/// Render-time handle for one bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub position: usize,
    pub url: String,
    pub state: EntryState,
    /// Contents of the edit field.
    pub edit_value: String,
    /// Set when the last save attempt held an invalid URL.
    pub invalid: bool,
}

impl Entry {
    fn new(position: usize, url: &str) -> Self {
        Self {
            position,
            url: url.to_string(),
            state: EntryState::Viewing,
            edit_value: url.to_string(),
            invalid: false,
        }
    }

    /// Switches between viewing and editing. Entering edit mode refills the
    /// field with the stored URL; either direction clears the error flag.
    fn toggle_edit_mode(&mut self) {
        self.invalid = false;
        self.edit_value = self.url.clone();
        self.state = match self.state {
            EntryState::Viewing => EntryState::Editing,
            EntryState::Editing => EntryState::Viewing,
        };
    }

    fn to_html(&self) -> String {
        let mut classes = String::from("bookmark");
        if self.state == EntryState::Editing {
            classes.push_str(" is-editing");
        }
        if self.invalid {
            classes.push_str(" is-invalid");
        }
        let autofocus = if self.state == EntryState::Editing {
            " autofocus"
        } else {
            ""
        };

        format!(
            "<div class=\"{classes}\" data-bookmarkid=\"{position}\">\
<a class=\"bookmark_url\" href=\"{href}\" target=\"_blank\">{display}</a>\
<input class=\"bookmark_editurl\" type=\"text\" value=\"{value}\"{autofocus} />\
<span class=\"bookmark_error\">Please specify a valid URL</span>\
<div class=\"bookmark_buttons\">\
<button class=\"button button-secondary\" data-action=\"edit\">Edit</button>\
<button class=\"button button-last\" data-action=\"delete\">Delete</button>\
<button class=\"button button-last\" data-action=\"cancel\">Cancel</button>\
<button class=\"button\" data-action=\"save\">Save</button>\
</div></div>",
            classes = classes,
            position = self.position,
            href = escape(&self.url),
            display = escape(url_without_protocol(&self.url)),
            value = escape(&self.edit_value),
            autofocus = autofocus,
        )
    }
}

const EMPTY_LIST_HTML: &str = "<div class=\"memo\">\
<h2 class=\"memo_title\">Bookmark List Empty</h2>\
<span class=\"memo_msg\">Add a new bookmark above.</span>\
</div>";

/// Presenter for a page of bookmark entries.
#[derive(Default)]
pub struct BookmarkListPresenter {
    entries: Vec<Entry>,
    handlers: ListHandlers,
}

impl BookmarkListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handler` in its event slot, replacing any previous one.
    pub fn register_handler(&mut self, handler: ListHandler) {
        match handler {
            ListHandler::Save(f) => self.handlers.on_save = Some(f),
            ListHandler::Delete(f) => self.handlers.on_delete = Some(f),
        }
    }

    /// Renders up to `limit` bookmarks starting at `index_start`.
    ///
    /// Clears `container` first. An empty window renders the empty-list memo.
    pub fn render(
        &mut self,
        container: &mut Container,
        bookmarks: &[String],
        index_start: usize,
        limit: usize,
    ) {
        self.entries = list_window::slice_from(bookmarks, index_start, limit)
            .into_iter()
            .map(|(position, url)| Entry::new(position, url))
            .collect();
        self.draw(container);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, position: usize) -> Option<&Entry> {
        self.entries.iter().find(|e| e.position == position)
    }

    /// Applies `action` to the entry at `position` and redraws `container`.
    ///
    /// Returns `false` when no entry with that position was rendered, which
    /// happens for positions captured before the last render.
    pub fn dispatch(&mut self, container: &mut Container, position: usize, action: EntryAction) -> bool {
        let Some(idx) = self.entries.iter().position(|e| e.position == position) else {
            debug!("ignoring {:?} for stale bookmark position {}", action, position);
            return false;
        };

        match action {
            EntryAction::Edit => self.entries[idx].toggle_edit_mode(),
            EntryAction::Cancel => {
                if self.entries[idx].state == EntryState::Editing {
                    self.entries[idx].toggle_edit_mode();
                }
            }
            EntryAction::Input(text) => {
                if self.entries[idx].state == EntryState::Editing {
                    self.entries[idx].edit_value = text;
                }
            }
            EntryAction::Save | EntryAction::KeyUp(Key::Enter) => self.save(idx),
            EntryAction::KeyUp(_) => return true,
            EntryAction::Delete => {
                if let Some(on_delete) = self.handlers.on_delete.as_mut() {
                    on_delete(position);
                }
                // The owner re-renders after deleting; nothing changes locally.
                return true;
            }
        }

        self.draw(container);
        true
    }

    fn save(&mut self, idx: usize) {
        let entry = &mut self.entries[idx];
        if entry.state != EntryState::Editing {
            return;
        }

        let new_url = entry.edit_value.trim().to_string();
        if !validate_url(&new_url) {
            debug!("rejecting invalid URL for bookmark {}", entry.position);
            entry.invalid = true;
            return;
        }

        entry.url = new_url;
        entry.toggle_edit_mode();
        if let Some(on_save) = self.handlers.on_save.as_mut() {
            on_save(entry.position, &entry.url);
        }
        entry.invalid = false;
    }

    fn draw(&self, container: &mut Container) {
        if self.entries.is_empty() {
            container.set_inner_html(EMPTY_LIST_HTML.to_string());
            return;
        }
        let html: String = self.entries.iter().map(Entry::to_html).collect();
        container.set_inner_html(html);
    }
}

//! Form for adding a bookmark above the list.

use log::debug;

use super::container::Container;
use super::html::escape;
use super::Key;
use crate::services::url_validation::validate_url;

/// Called with the trimmed URL when a valid bookmark is submitted.
pub type AddHandler = Box<dyn FnMut(&str)>;

#[derive(Default)]
pub struct AddBookmarkForm {
    value: String,
    invalid: bool,
    on_add: Option<AddHandler>,
}

impl AddBookmarkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the add handler.
    pub fn register_handler(&mut self, handler: AddHandler) {
        self.on_add = Some(handler);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn input(&mut self, container: &mut Container, text: &str) {
        self.value = text.to_string();
        self.render(container);
    }

    /// Validates the field. A valid URL is handed to the add handler and the
    /// field is cleared; an invalid one only sets the error flag.
    ///
    /// Returns whether the handler was invoked.
    pub fn submit(&mut self, container: &mut Container) -> bool {
        let url = self.value.trim().to_string();
        let accepted = validate_url(&url);
        if accepted {
            self.invalid = false;
            self.value.clear();
            if let Some(on_add) = self.on_add.as_mut() {
                on_add(&url);
            }
        } else {
            debug!("add form rejected invalid URL");
            self.invalid = true;
        }
        self.render(container);
        accepted
    }

    /// Enter submits, other keys are ignored.
    pub fn key_up(&mut self, container: &mut Container, key: Key) -> bool {
        match key {
            Key::Enter => self.submit(container),
            _ => false,
        }
    }

    pub fn render(&self, container: &mut Container) {
        let class = if self.invalid {
            "addbookmark is-invalid"
        } else {
            "addbookmark"
        };
        container.set_inner_html(format!(
            "<form class=\"{}\">\
<input class=\"addbookmark_url\" type=\"text\" placeholder=\"https://\" value=\"{}\" />\
<span class=\"addbookmark_error\">Please specify a valid URL</span>\
<button class=\"button\" type=\"button\" data-action=\"add\">Add bookmark</button>\
</form>",
            class,
            escape(&self.value)
        ));
    }
}

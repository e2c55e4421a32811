// Shelfmark presenters
// Render HTML fragments into containers and translate user input into handler calls.

pub mod add_form;
pub mod bookmark_list;
pub mod container;
pub mod html;
pub mod pages;
pub mod pagination;

/// Keys the presenters react to on key-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

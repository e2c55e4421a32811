//! Unit tests for the bookmark list presenter and the add form.
//!
//! Handlers are recorded into shared vectors so each test can assert exactly
//! which callbacks fired.

use std::cell::RefCell;
use std::rc::Rc;

use shelfmark::components::add_form::AddBookmarkForm;
use shelfmark::components::bookmark_list::{
    BookmarkListPresenter, EntryAction, EntryState, ListHandler,
};
use shelfmark::components::container::Container;
use shelfmark::components::Key;

type Saves = Rc<RefCell<Vec<(usize, String)>>>;
type Deletes = Rc<RefCell<Vec<usize>>>;

fn urls(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://site{}.com", i)).collect()
}

/// Presenter rendered over `bookmarks[start..start+limit]` with recording handlers.
fn setup(bookmarks: &[String], start: usize, limit: usize) -> (BookmarkListPresenter, Container, Saves, Deletes) {
    let mut presenter = BookmarkListPresenter::new();
    let mut container = Container::new("bookmarks");
    let saves: Saves = Rc::default();
    let deletes: Deletes = Rc::default();

    let s = saves.clone();
    presenter.register_handler(ListHandler::Save(Box::new(move |pos, url| {
        s.borrow_mut().push((pos, url.to_string()));
    })));
    let d = deletes.clone();
    presenter.register_handler(ListHandler::Delete(Box::new(move |pos| {
        d.borrow_mut().push(pos);
    })));

    presenter.render(&mut container, bookmarks, start, limit);
    (presenter, container, saves, deletes)
}

// ─── Rendering ───

#[test]
fn test_render_uses_absolute_positions() {
    let bookmarks = urls(25);
    let (presenter, container, _, _) = setup(&bookmarks, 20, 20);

    let positions: Vec<usize> = presenter.entries().iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![20, 21, 22, 23, 24]);
    assert!(container.inner_html().contains("data-bookmarkid=\"20\""));
    assert!(container.inner_html().contains(">site24.com</a>"));
    assert!(!container.inner_html().contains("data-bookmarkid=\"19\""));
}

#[test]
fn test_render_empty_window_shows_memo() {
    let (presenter, container, _, _) = setup(&[], 0, 20);
    assert!(presenter.entries().is_empty());
    assert!(container.inner_html().contains("Bookmark List Empty"));
}

#[test]
fn test_render_replaces_previous_entries() {
    let bookmarks = urls(3);
    let (mut presenter, mut container, _, _) = setup(&bookmarks, 0, 20);
    presenter.dispatch(&mut container, 1, EntryAction::Edit);

    let fewer = urls(2);
    presenter.render(&mut container, &fewer, 0, 20);
    assert_eq!(presenter.entries().len(), 2);
    assert!(presenter.entries().iter().all(|e| e.state == EntryState::Viewing));
}

// ─── Edit / cancel ───

#[test]
fn test_edit_toggles_editing_class() {
    let bookmarks = urls(1);
    let (mut presenter, mut container, _, _) = setup(&bookmarks, 0, 20);

    assert!(presenter.dispatch(&mut container, 0, EntryAction::Edit));
    assert_eq!(presenter.entry(0).unwrap().state, EntryState::Editing);
    assert!(container.inner_html().contains("bookmark is-editing"));
    assert!(container.inner_html().contains("autofocus"));

    presenter.dispatch(&mut container, 0, EntryAction::Edit);
    assert_eq!(presenter.entry(0).unwrap().state, EntryState::Viewing);
}

#[test]
fn test_cancel_discards_edit_and_error() {
    let bookmarks = urls(1);
    let (mut presenter, mut container, saves, _) = setup(&bookmarks, 0, 20);

    presenter.dispatch(&mut container, 0, EntryAction::Edit);
    presenter.dispatch(&mut container, 0, EntryAction::Input("ftp://x".into()));
    presenter.dispatch(&mut container, 0, EntryAction::Save);
    assert!(presenter.entry(0).unwrap().invalid);

    presenter.dispatch(&mut container, 0, EntryAction::Cancel);
    let entry = presenter.entry(0).unwrap();
    assert_eq!(entry.state, EntryState::Viewing);
    assert!(!entry.invalid);
    assert_eq!(entry.edit_value, "https://site0.com");
    assert!(saves.borrow().is_empty());
}

#[test]
fn test_cancel_while_viewing_is_noop() {
    let bookmarks = urls(1);
    let (mut presenter, mut container, _, _) = setup(&bookmarks, 0, 20);
    presenter.dispatch(&mut container, 0, EntryAction::Cancel);
    assert_eq!(presenter.entry(0).unwrap().state, EntryState::Viewing);
}

// ─── Save ───

#[test]
fn test_invalid_url_sets_error_without_saving() {
    let bookmarks = urls(4);
    let (mut presenter, mut container, saves, _) = setup(&bookmarks, 0, 20);

    presenter.dispatch(&mut container, 3, EntryAction::Edit);
    presenter.dispatch(&mut container, 3, EntryAction::Input("ftp://x".into()));
    presenter.dispatch(&mut container, 3, EntryAction::Save);

    let entry = presenter.entry(3).unwrap();
    assert!(entry.invalid);
    assert_eq!(entry.state, EntryState::Editing);
    assert!(container.inner_html().contains("is-invalid"));
    assert!(saves.borrow().is_empty());
}

#[test]
fn test_valid_url_saves_and_leaves_edit_mode() {
    let bookmarks = urls(4);
    let (mut presenter, mut container, saves, _) = setup(&bookmarks, 0, 20);

    presenter.dispatch(&mut container, 3, EntryAction::Edit);
    presenter.dispatch(&mut container, 3, EntryAction::Input("https://example.com".into()));
    presenter.dispatch(&mut container, 3, EntryAction::Save);

    assert_eq!(*saves.borrow(), vec![(3, "https://example.com".to_string())]);
    let entry = presenter.entry(3).unwrap();
    assert_eq!(entry.state, EntryState::Viewing);
    assert!(!entry.invalid);
    assert_eq!(entry.url, "https://example.com");
    assert!(container.inner_html().contains(">example.com</a>"));
}

#[test]
fn test_enter_key_saves_other_keys_do_not() {
    let bookmarks = urls(2);
    let (mut presenter, mut container, saves, _) = setup(&bookmarks, 0, 20);

    presenter.dispatch(&mut container, 1, EntryAction::Edit);
    presenter.dispatch(&mut container, 1, EntryAction::Input(" https://rust-lang.org ".into()));
    presenter.dispatch(&mut container, 1, EntryAction::KeyUp(Key::Other));
    assert!(saves.borrow().is_empty());

    presenter.dispatch(&mut container, 1, EntryAction::KeyUp(Key::Enter));
    assert_eq!(*saves.borrow(), vec![(1, "https://rust-lang.org".to_string())]);
}

#[test]
fn test_save_while_viewing_is_ignored() {
    let bookmarks = urls(1);
    let (mut presenter, mut container, saves, _) = setup(&bookmarks, 0, 20);
    presenter.dispatch(&mut container, 0, EntryAction::Save);
    presenter.dispatch(&mut container, 0, EntryAction::Input("https://other.com".into()));
    assert!(saves.borrow().is_empty());
    assert_eq!(presenter.entry(0).unwrap().edit_value, "https://site0.com");
}

// ─── Delete / stale ───

#[test]
fn test_delete_reports_position() {
    let bookmarks = urls(25);
    let (mut presenter, mut container, _, deletes) = setup(&bookmarks, 20, 20);
    presenter.dispatch(&mut container, 22, EntryAction::Delete);
    assert_eq!(*deletes.borrow(), vec![22]);
}

#[test]
fn test_stale_position_is_ignored() {
    let bookmarks = urls(25);
    let (mut presenter, mut container, saves, deletes) = setup(&bookmarks, 20, 20);
    assert!(!presenter.dispatch(&mut container, 3, EntryAction::Delete));
    assert!(!presenter.dispatch(&mut container, 40, EntryAction::Save));
    assert!(deletes.borrow().is_empty());
    assert!(saves.borrow().is_empty());
}

#[test]
fn test_entry_markup_is_escaped() {
    let bookmarks = vec!["https://example.com/?a=1&b=\"2\"".to_string()];
    let (_, container, _, _) = setup(&bookmarks, 0, 20);
    assert!(container.inner_html().contains("a=1&amp;b=&quot;2&quot;"));
}

// ─── Add form ───

#[test]
fn test_add_form_rejects_invalid_url() {
    let mut form = AddBookmarkForm::new();
    let mut container = Container::new("addbookmark");
    let added: Rc<RefCell<Vec<String>>> = Rc::default();
    let a = added.clone();
    form.register_handler(Box::new(move |url| a.borrow_mut().push(url.to_string())));

    form.input(&mut container, "example.com");
    assert!(!form.submit(&mut container));
    assert!(form.is_invalid());
    assert_eq!(form.value(), "example.com");
    assert!(container.inner_html().contains("addbookmark is-invalid"));
    assert!(added.borrow().is_empty());
}

#[test]
fn test_add_form_enter_submits_and_clears() {
    let mut form = AddBookmarkForm::new();
    let mut container = Container::new("addbookmark");
    let added: Rc<RefCell<Vec<String>>> = Rc::default();
    let a = added.clone();
    form.register_handler(Box::new(move |url| a.borrow_mut().push(url.to_string())));

    form.input(&mut container, "  https://example.com ");
    assert!(!form.key_up(&mut container, Key::Other));
    assert!(form.key_up(&mut container, Key::Enter));
    assert_eq!(*added.borrow(), vec!["https://example.com".to_string()]);
    assert_eq!(form.value(), "");
    assert!(!form.is_invalid());
}

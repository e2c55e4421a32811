//! Unit tests for the application controller: routing, pagination after
//! mutations, and the add/edit/delete flows driven through UI events.

use shelfmark::components::bookmark_list::EntryAction;
use shelfmark::components::Key;
use shelfmark::controller::{AppController, UiEvent};
use shelfmark::managers::bookmark_storage::{BookmarkStorageTrait, MemoryStorage};
use shelfmark::types::route::Route;

fn urls(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://site{}.com", i)).collect()
}

/// Controller over `n` bookmarks, 20 per page, showing `hash`.
fn controller_at(n: usize, hash: &str) -> AppController<MemoryStorage> {
    let mut controller = AppController::new(MemoryStorage::with_bookmarks(urls(n)), 20);
    controller.set_view(hash).expect("set_view failed");
    controller
}

fn positions(controller: &AppController<MemoryStorage>) -> Vec<usize> {
    controller
        .index_page()
        .list()
        .entries()
        .iter()
        .map(|e| e.position)
        .collect()
}

fn entry(position: usize, action: EntryAction) -> UiEvent {
    UiEvent::Entry { position, action }
}

// ─── Routing ───

#[test]
fn test_index_shows_first_page() {
    let controller = controller_at(25, "#/");
    assert_eq!(controller.route(), Route::Index(1));
    assert_eq!(positions(&controller), (0..20).collect::<Vec<_>>());
    assert!(controller.index_page().pagination_html().contains("is-active\"><a href=\"#/1\""));
}

#[test]
fn test_second_page_shows_remainder() {
    let controller = controller_at(25, "#/2");
    assert_eq!(controller.current_page(), 2);
    assert_eq!(positions(&controller), vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_page_past_end_renders_empty_memo() {
    let controller = controller_at(5, "#/4");
    assert!(positions(&controller).is_empty());
    assert!(controller.index_page().list_html().contains("Bookmark List Empty"));
}

#[test]
fn test_submitted_view_shows_last_bookmark() {
    let controller = controller_at(3, "#/submitted");
    assert_eq!(controller.route(), Route::Submitted);
    let html = controller.submitted_page().html();
    assert!(html.contains("Bookmark submitted"));
    assert!(html.contains(">site2.com</a>"));
}

#[test]
fn test_submitted_view_without_bookmarks() {
    let controller = controller_at(0, "#/submitted");
    assert!(controller.submitted_page().html().contains("Nothing submitted yet"));
}

// ─── Delete ───

#[test]
fn test_delete_last_item_on_last_page_moves_back() {
    let mut controller = controller_at(21, "#/2");
    assert_eq!(positions(&controller), vec![20]);

    controller.handle_event(entry(20, EntryAction::Delete)).unwrap();

    assert_eq!(controller.route(), Route::Index(1));
    assert_eq!(controller.location(), "#/1");
    assert_eq!(controller.storage().len(), 20);
    assert_eq!(positions(&controller), (0..20).collect::<Vec<_>>());
}

#[test]
fn test_delete_keeps_page_when_it_still_exists() {
    let mut controller = controller_at(25, "#/1");
    controller.handle_event(entry(3, EntryAction::Delete)).unwrap();

    assert_eq!(controller.route(), Route::Index(1));
    assert_eq!(controller.storage().len(), 24);
    // Positions stay dense after the removal shifts later bookmarks down.
    assert_eq!(positions(&controller), (0..20).collect::<Vec<_>>());
    assert_eq!(
        controller.index_page().list().entry(3).unwrap().url,
        "https://site4.com"
    );
}

#[test]
fn test_delete_only_bookmark_shows_empty_first_page() {
    let mut controller = controller_at(1, "#/");
    controller.handle_event(entry(0, EntryAction::Delete)).unwrap();
    assert_eq!(controller.route(), Route::Index(1));
    assert!(controller.storage().is_empty());
    assert!(controller.index_page().list_html().contains("Bookmark List Empty"));
}

// ─── Edit ───

#[test]
fn test_edit_save_updates_storage() {
    let mut controller = controller_at(25, "#/2");
    controller.handle_event(entry(22, EntryAction::Edit)).unwrap();
    controller
        .handle_event(entry(22, EntryAction::Input("https://example.com".into())))
        .unwrap();
    controller.handle_event(entry(22, EntryAction::KeyUp(Key::Enter))).unwrap();

    assert_eq!(controller.storage().fetch().unwrap()[22], "https://example.com");
    assert_eq!(controller.route(), Route::Index(2));
    assert_eq!(positions(&controller), vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_invalid_edit_leaves_storage_untouched() {
    let mut controller = controller_at(5, "#/");
    controller.handle_event(entry(2, EntryAction::Edit)).unwrap();
    controller
        .handle_event(entry(2, EntryAction::Input("ftp://x".into())))
        .unwrap();
    controller.handle_event(entry(2, EntryAction::Save)).unwrap();

    assert_eq!(controller.storage().fetch().unwrap()[2], "https://site2.com");
    assert!(controller.index_page().list().entry(2).unwrap().invalid);
}

// ─── Add ───

#[test]
fn test_add_navigates_to_submitted() {
    let mut controller = controller_at(2, "#/");
    controller
        .handle_event(UiEvent::AddInput("https://new.example".into()))
        .unwrap();
    controller.handle_event(UiEvent::AddSubmit).unwrap();

    assert_eq!(controller.route(), Route::Submitted);
    assert_eq!(controller.location(), "#/submitted");
    assert_eq!(
        controller.storage().fetch_last().unwrap().as_deref(),
        Some("https://new.example")
    );
    assert!(controller.submitted_page().html().contains("new.example"));
}

#[test]
fn test_add_invalid_stays_on_index() {
    let mut controller = controller_at(2, "#/");
    controller.handle_event(UiEvent::AddInput("nope".into())).unwrap();
    controller.handle_event(UiEvent::AddKeyUp(Key::Enter)).unwrap();

    assert_eq!(controller.route(), Route::Index(1));
    assert_eq!(controller.storage().len(), 2);
    assert!(controller.index_page().form().is_invalid());
}

#[test]
fn test_events_ignored_on_submitted_view() {
    let mut controller = controller_at(3, "#/submitted");
    controller.handle_event(entry(0, EntryAction::Delete)).unwrap();
    assert_eq!(controller.storage().len(), 3);
}

// ─── Page size ───

#[test]
fn test_set_per_page_rerenders_current_location() {
    let mut controller = controller_at(25, "#/2");
    controller.set_per_page(10).unwrap();
    assert_eq!(controller.per_page(), 10);
    assert_eq!(positions(&controller), (10..20).collect::<Vec<_>>());
}

//! Shelfmark: a paginated bookmark manager with inline editing.
//!
//! Entry point: with the `gui` feature, opens the webview window.
//! Without it, runs a console walkthrough against in-memory storage.

const DEFAULT_LOGGING: &str = "info,shelfmark=info";

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOGGING))
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    shelfmark::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();

    println!();
    println!("Shelfmark v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!("(build with --features gui for the webview)");
    println!();

    if let Err(e) = demo() {
        log::error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn section(title: &str) {
    println!("── {} ──", title);
}

#[cfg(not(feature = "gui"))]
fn demo() -> Result<(), Box<dyn std::error::Error>> {
    use shelfmark::components::bookmark_list::EntryAction;
    use shelfmark::controller::{AppController, UiEvent};
    use shelfmark::managers::bookmark_storage::{BookmarkStorageTrait, MemoryStorage};
    use shelfmark::types::route::Route;

    let seed = (1..=21).map(|i| format!("https://example.com/{}", i));
    let mut controller = AppController::new(MemoryStorage::with_bookmarks(seed), 20);

    section("Index");
    controller.set_view("#/")?;
    println!("  {} entries on page 1", controller.index_page().list().entries().len());

    section("Page 2");
    controller.set_view("#/2")?;
    let entries = controller.index_page().list().entries();
    println!(
        "  {} entry on page 2 at position {}",
        entries.len(),
        entries.first().map(|e| e.position).unwrap_or_default()
    );

    section("Edit");
    let events = [
        EntryAction::Edit,
        EntryAction::Input("ftp://x".to_string()),
        EntryAction::Save,
    ];
    for action in events {
        controller.handle_event(UiEvent::Entry { position: 20, action })?;
    }
    let invalid = controller.index_page().list().entry(20).map(|e| e.invalid);
    println!("  ftp://x rejected: {}", invalid.unwrap_or(false));
    controller.handle_event(UiEvent::Entry {
        position: 20,
        action: EntryAction::Input("https://rust-lang.org".to_string()),
    })?;
    controller.handle_event(UiEvent::Entry { position: 20, action: EntryAction::Save })?;
    println!("  stored: {:?}", controller.storage().fetch()?.get(20));

    section("Delete");
    controller.handle_event(UiEvent::Entry { position: 20, action: EntryAction::Delete })?;
    println!("  now at {} ({} bookmarks)", controller.route(), controller.storage().len());

    section("Add");
    controller.handle_event(UiEvent::AddInput("https://docs.rs".to_string()))?;
    controller.handle_event(UiEvent::AddSubmit)?;
    println!(
        "  now at {}: submitted = {}",
        controller.route(),
        controller.route() == Route::Submitted
    );
    println!();
    Ok(())
}

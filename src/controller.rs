//! Application controller.
//!
//! Interprets the location hash, loads the collection from storage, renders
//! the matching page and turns presenter events into storage mutations.
//!
//! Presenter handlers do not call back into the controller directly: they
//! send an [`Intent`] over a channel that the controller drains after each
//! UI event, the same way a window event loop delivers user events.

use std::sync::mpsc::{self, Receiver, Sender};

use log::{debug, info};

use crate::components::bookmark_list::EntryAction;
use crate::components::pages::{IndexPage, IndexState, SubmittedPage};
use crate::components::Key;
use crate::managers::bookmark_storage::BookmarkStorageTrait;
use crate::services::pager;
use crate::types::errors::StorageError;
use crate::types::route::Route;
use crate::types::settings::DEFAULT_PER_PAGE;

/// A request raised by a presenter for the controller to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add { url: String },
    Save { position: usize, url: String },
    Delete { position: usize },
}

/// User input delivered to the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Entry { position: usize, action: EntryAction },
    AddInput(String),
    AddSubmit,
    AddKeyUp(Key),
}

pub struct AppController<S: BookmarkStorageTrait> {
    storage: S,
    per_page: usize,
    current_page: usize,
    route: Route,
    location: String,
    index_page: IndexPage,
    submitted_page: SubmittedPage,
    intents_tx: Sender<Intent>,
    intents_rx: Receiver<Intent>,
}

impl<S: BookmarkStorageTrait> AppController<S> {
    /// Creates a controller showing `per_page` bookmarks per index page.
    /// Nothing is rendered until the first [`set_view`](Self::set_view).
    pub fn new(storage: S, per_page: usize) -> Self {
        let (intents_tx, intents_rx) = mpsc::channel();
        Self {
            storage,
            per_page: per_page.max(1),
            current_page: 1,
            route: Route::default(),
            location: String::new(),
            index_page: IndexPage::new(),
            submitted_page: SubmittedPage::new(),
            intents_tx,
            intents_rx,
        }
    }

    /// Controller with the default page size.
    pub fn with_default_page_size(storage: S) -> Self {
        Self::new(storage, DEFAULT_PER_PAGE)
    }

    /// Handles a location change (e.g. `#/`, `#/2`, `#/submitted`).
    pub fn set_view(&mut self, hash: &str) -> Result<(), StorageError> {
        let route = Route::parse(hash);
        self.location = hash.to_string();
        if let Route::Index(page) = route {
            self.current_page = page;
        }
        self.route = route;
        debug!("route {:?} from '{}'", route, hash);

        match route {
            Route::Index(_) => self.load_index_view(),
            Route::Submitted => self.load_submitted_view(),
        }
    }

    /// Changes the location to `route` and reacts as to any location change.
    pub fn navigate(&mut self, route: Route) -> Result<(), StorageError> {
        debug!("navigate to {}", route);
        self.set_view(&route.to_hash())
    }

    fn load_index_view(&mut self) -> Result<(), StorageError> {
        let bookmarks = self.storage.fetch()?;
        let state = IndexState {
            bookmarks: &bookmarks,
            per_page: self.per_page,
            current_page: self.current_page,
            total_pages: pager::page_count(bookmarks.len(), self.per_page),
        };
        self.index_page.render(state);

        let tx = self.intents_tx.clone();
        self.index_page.bind_delete_bookmark(Box::new(move |position| {
            let _ = tx.send(Intent::Delete { position });
        }));
        let tx = self.intents_tx.clone();
        self.index_page.bind_update_bookmark(Box::new(move |position, url| {
            let _ = tx.send(Intent::Save {
                position,
                url: url.to_string(),
            });
        }));
        let tx = self.intents_tx.clone();
        self.index_page.bind_add_bookmark(Box::new(move |url| {
            let _ = tx.send(Intent::Add {
                url: url.to_string(),
            });
        }));
        Ok(())
    }

    fn load_submitted_view(&mut self) -> Result<(), StorageError> {
        let last = self.storage.fetch_last()?;
        self.submitted_page.render(last.as_deref());
        Ok(())
    }

    /// Stores a new bookmark and shows the confirmation route.
    pub fn add_bookmark(&mut self, url: &str) -> Result<(), StorageError> {
        self.storage.insert(url)?;
        info!("bookmark added");
        self.navigate(Route::Submitted)
    }

    /// Deletes the bookmark at `position`. If the current page no longer
    /// exists afterwards, navigates to the new last page.
    pub fn delete_bookmark(&mut self, position: usize) -> Result<(), StorageError> {
        self.storage.delete(position)?;
        info!("bookmark {} deleted", position);

        let bookmarks = self.storage.fetch()?;
        if self.current_page > pager::page_count(bookmarks.len(), self.per_page) {
            self.navigate(Route::Index(pager::last_page(bookmarks.len(), self.per_page)))
        } else {
            self.index_page
                .update_bookmarks(&bookmarks, self.per_page, self.current_page);
            Ok(())
        }
    }

    /// Replaces the bookmark at `position` and re-renders the current page.
    pub fn update_bookmark(&mut self, position: usize, url: &str) -> Result<(), StorageError> {
        self.storage.update(position, url)?;
        info!("bookmark {} updated", position);

        let bookmarks = self.storage.fetch()?;
        self.index_page
            .update_bookmarks(&bookmarks, self.per_page, self.current_page);
        Ok(())
    }

    /// Delivers user input to the index view, then carries out any intents
    /// it raised. Input arriving while another route is shown is ignored.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), StorageError> {
        if self.route == Route::Submitted {
            debug!("ignoring {:?} on the submitted view", event);
            return Ok(());
        }

        match event {
            UiEvent::Entry { position, action } => {
                self.index_page.dispatch_entry(position, action);
            }
            UiEvent::AddInput(text) => self.index_page.add_input(&text),
            UiEvent::AddSubmit => {
                self.index_page.add_submit();
            }
            UiEvent::AddKeyUp(key) => {
                self.index_page.add_key_up(key);
            }
        }

        self.process_intents()
    }

    fn process_intents(&mut self) -> Result<(), StorageError> {
        while let Ok(intent) = self.intents_rx.try_recv() {
            match intent {
                Intent::Add { url } => self.add_bookmark(&url)?,
                Intent::Save { position, url } => self.update_bookmark(position, &url)?,
                Intent::Delete { position } => self.delete_bookmark(position)?,
            }
        }
        Ok(())
    }

    /// Changes the page size and re-renders the current view.
    pub fn set_per_page(&mut self, per_page: usize) -> Result<(), StorageError> {
        self.per_page = per_page.max(1);
        let location = self.location.clone();
        self.set_view(&location)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn index_page(&self) -> &IndexPage {
        &self.index_page
    }

    pub fn submitted_page(&self) -> &SubmittedPage {
        &self.submitted_page
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

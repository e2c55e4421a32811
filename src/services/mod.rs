// Shelfmark services
// Stateless helpers (paging, windowing, URL checks) and the settings engine.

pub mod list_window;
pub mod pager;
pub mod settings_engine;
pub mod url_validation;

//! RPC method handler for the Shelfmark JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. `handle_method`
//! translates each call into a controller action and answers with the
//! resulting view.

use std::sync::Mutex;

use serde_json::{json, Map, Value};

use crate::app::App;
use crate::components::bookmark_list::{EntryAction, EntryState};
use crate::components::Key;
use crate::controller::UiEvent;
use crate::managers::bookmark_storage::BookmarkStorageTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::route::Route;

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let mut a = app.lock().map_err(|e| e.to_string())?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Navigation ───
        "route" => {
            let hash = params.get("hash").and_then(|v| v.as_str()).ok_or("missing hash")?;
            a.controller.set_view(hash).map_err(|e| e.to_string())?;
            Ok(view_json(&a))
        }
        "view" => Ok(view_json(&a)),

        // ─── Bookmarks ───
        "bookmark.list" => {
            let items = a.controller.storage().fetch().map_err(|e| e.to_string())?;
            Ok(json!({"total": items.len(), "items": items}))
        }
        "bookmark.add" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            if a.controller.route() == Route::Submitted {
                a.controller.navigate(Route::default()).map_err(|e| e.to_string())?;
            }
            send(&mut a, UiEvent::AddInput(url.to_string()))?;
            send(&mut a, UiEvent::AddSubmit)?;
            // A valid submission always ends on the confirmation route.
            if a.controller.route() != Route::Submitted {
                return Err("invalid url: must be an absolute http(s) URL".to_string());
            }
            Ok(view_json(&a))
        }

        // ─── Add form ───
        "form.input" => {
            let text = params.get("text").and_then(|v| v.as_str()).ok_or("missing text")?;
            send(&mut a, UiEvent::AddInput(text.to_string()))?;
            Ok(view_json(&a))
        }
        "form.submit" => {
            send(&mut a, UiEvent::AddSubmit)?;
            Ok(view_json(&a))
        }
        "form.keyup" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            send(&mut a, UiEvent::AddKeyUp(Key::from_dom(key)))?;
            Ok(view_json(&a))
        }

        // ─── Entries ───
        "entry.edit" | "entry.cancel" | "entry.save" | "entry.delete" => {
            let position = param_position(params)?;
            let button = method.trim_start_matches("entry.");
            let action = EntryAction::from_button(button).ok_or("unknown entry action")?;
            send(&mut a, UiEvent::Entry { position, action })?;
            Ok(view_json(&a))
        }
        "entry.input" => {
            let position = param_position(params)?;
            let text = params.get("text").and_then(|v| v.as_str()).ok_or("missing text")?;
            let action = EntryAction::Input(text.to_string());
            send(&mut a, UiEvent::Entry { position, action })?;
            Ok(view_json(&a))
        }
        "entry.keyup" => {
            let position = param_position(params)?;
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let action = EntryAction::KeyUp(Key::from_dom(key));
            send(&mut a, UiEvent::Entry { position, action })?;
            Ok(view_json(&a))
        }

        // ─── Settings ───
        "settings.get" => {
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

fn send(app: &mut App, event: UiEvent) -> Result<(), String> {
    app.controller.handle_event(event).map_err(|e| e.to_string())
}

fn param_position(params: &Value) -> Result<usize, String> {
    params
        .get("position")
        .and_then(|v| v.as_u64())
        .map(|p| p as usize)
        .ok_or_else(|| "missing position".to_string())
}

/// Snapshot of the current route and its rendered regions.
pub fn view_json(app: &App) -> Value {
    let controller = &app.controller;
    let mut html = Map::new();

    match controller.route() {
        Route::Index(page) => {
            let index = controller.index_page();
            for container in index.containers() {
                html.insert(container.id().to_string(), json!(container.inner_html()));
            }
            let entries: Vec<Value> = index
                .list()
                .entries()
                .iter()
                .map(|e| {
                    json!({
                        "position": e.position,
                        "url": e.url,
                        "editing": e.state == EntryState::Editing,
                        "edit_value": e.edit_value,
                        "invalid": e.invalid,
                    })
                })
                .collect();
            json!({
                "location": controller.location(),
                "route": "index",
                "page": page,
                "per_page": controller.per_page(),
                "entries": entries,
                "html": html,
            })
        }
        Route::Submitted => {
            let container = controller.submitted_page().container();
            html.insert(container.id().to_string(), json!(container.inner_html()));
            json!({
                "location": controller.location(),
                "route": "submitted",
                "html": html,
            })
        }
    }
}

//! WebView host using `wry` + `tao`.
//!
//! Architecture:
//! - The app shell is served from the `sm://` custom protocol.
//! - The shell script forwards hash changes, clicks, input and key-ups
//!   to Rust via `window.ipc.postMessage()`.
//! - Rust runs the event through the controller and answers with a script
//!   that swaps the rendered regions into the page.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, warn};
use serde::Deserialize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::components::bookmark_list::EntryAction;
use crate::components::Key;
use crate::controller::UiEvent;
use crate::rpc_handler::view_json;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// Messages posted by the shell script.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum IpcMessage {
    Route { hash: String },
    Entry { position: usize, action: String },
    EntryInput { position: usize, text: String },
    EntryKeyup { position: usize, key: String },
    AddInput { text: String },
    AddSubmit,
    AddKeyup { key: String },
}

const SHELL_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Helvetica,Arial,sans-serif;background:#0d1117;color:#e6edf3;padding:32px 48px;max-width:860px}
a{color:#58a6ff;text-decoration:none}
.button{background:#21262d;color:#e6edf3;border:1px solid #30363d;border-radius:6px;padding:4px 12px;cursor:pointer;margin-left:4px}
input[type=text]{background:#161b22;color:#e6edf3;border:1px solid #30363d;border-radius:6px;padding:6px 10px;width:60%}
.addbookmark{margin-bottom:24px}
.addbookmark_error,.bookmark_error{display:none;color:#f85149;margin-left:8px}
.is-invalid .addbookmark_error,.is-invalid .bookmark_error{display:inline}
.bookmark{display:flex;align-items:center;justify-content:space-between;padding:10px 0;border-bottom:1px solid #21262d}
.bookmark_editurl,.bookmark [data-action=cancel],.bookmark [data-action=save]{display:none}
.bookmark.is-editing .bookmark_editurl,.bookmark.is-editing [data-action=cancel],.bookmark.is-editing [data-action=save]{display:inline-block}
.bookmark.is-editing .bookmark_url,.bookmark.is-editing [data-action=edit],.bookmark.is-editing [data-action=delete]{display:none}
.memo{padding:24px 0}.memo_title{font-size:18px;margin-bottom:8px}.memo_msg{color:#7d8590}
.pagination{display:flex;list-style:none;gap:6px;margin-top:16px}
.pagination li a{display:block;padding:4px 10px;border:1px solid #30363d;border-radius:6px}
.pagination .is-active a{background:#1f6feb;color:#fff}
.pagination .is-disabled a{pointer-events:none;opacity:.4}
"#;

const SHELL_JS: &str = r#"
(function(){
  function send(m){window.ipc.postMessage(JSON.stringify(m))}
  function entryOf(el){var b=el.closest('.bookmark');return b?parseInt(b.dataset.bookmarkid,10):null}
  window.__sm_apply=function(v){
    for(var id in v.html){var el=document.getElementById(id);if(el)el.innerHTML=v.html[id]}
    document.getElementById('index-view').style.display=v.route==='index'?'':'none';
    document.getElementById('submitted-view').style.display=v.route==='submitted'?'':'none';
    window.__sm_hash=v.location;
    if(location.hash!==v.location)location.hash=v.location;
    var f=document.querySelector('.bookmark.is-editing .bookmark_editurl');
    if(f){f.focus();f.select()}
  };
  window.addEventListener('hashchange',function(){
    if(location.hash!==window.__sm_hash)send({kind:'route',hash:location.hash});
  });
  document.addEventListener('click',function(e){
    var b=e.target.closest('button[data-action]');if(!b)return;
    var a=b.dataset.action;
    if(a==='add'){send({kind:'add_submit'});return}
    var p=entryOf(b);if(p!==null)send({kind:'entry',position:p,action:a});
  });
  document.addEventListener('input',function(e){
    var t=e.target;
    if(t.classList.contains('bookmark_editurl'))send({kind:'entry_input',position:entryOf(t),text:t.value});
    else if(t.classList.contains('addbookmark_url'))send({kind:'add_input',text:t.value});
  });
  document.addEventListener('keyup',function(e){
    var t=e.target;
    if(t.classList.contains('bookmark_editurl'))send({kind:'entry_keyup',position:entryOf(t),key:e.key});
    else if(t.classList.contains('addbookmark_url'))send({kind:'add_keyup',key:e.key});
  });
  document.addEventListener('submit',function(e){e.preventDefault()});
  send({kind:'route',hash:location.hash||'#/'});
})();
"#;

fn shell_html() -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Shelfmark</title><style>{}</style></head><body>\
<div id=\"index-view\"><div id=\"addbookmark\"></div><div id=\"bookmarks\"></div><div id=\"pagination\"></div></div>\
<div id=\"submitted-view\" style=\"display:none\"><div id=\"submitted\"></div></div>\
<script>{}</script></body></html>",
        SHELL_CSS, SHELL_JS
    )
}

fn lock(state: &Mutex<App>) -> MutexGuard<'_, App> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ─── IPC handler ───

fn handle_ipc(app: &mut App, body: &str) -> Option<UserEvent> {
    let msg: IpcMessage = match serde_json::from_str(body) {
        Ok(m) => m,
        Err(e) => {
            warn!("malformed IPC message: {}", e);
            return None;
        }
    };

    // Text input only updates presenter state; redrawing would steal the caret.
    let redraw = !matches!(msg, IpcMessage::EntryInput { .. } | IpcMessage::AddInput { .. });

    let result = match msg {
        IpcMessage::Route { hash } => app.controller.set_view(&hash),
        IpcMessage::Entry { position, action } => match EntryAction::from_button(&action) {
            Some(action) => app.controller.handle_event(UiEvent::Entry { position, action }),
            None => {
                warn!("unknown entry action '{}'", action);
                return None;
            }
        },
        IpcMessage::EntryInput { position, text } => app.controller.handle_event(UiEvent::Entry {
            position,
            action: EntryAction::Input(text),
        }),
        IpcMessage::EntryKeyup { position, key } => app.controller.handle_event(UiEvent::Entry {
            position,
            action: EntryAction::KeyUp(Key::from_dom(&key)),
        }),
        IpcMessage::AddInput { text } => app.controller.handle_event(UiEvent::AddInput(text)),
        IpcMessage::AddSubmit => app.controller.handle_event(UiEvent::AddSubmit),
        IpcMessage::AddKeyup { key } => app.controller.handle_event(UiEvent::AddKeyUp(Key::from_dom(&key))),
    };

    if let Err(e) = result {
        error!("{}", e);
    }
    redraw.then(|| UserEvent::EvalScript(format!("window.__sm_apply({})", view_json(app))))
}

// ─── Main entry point ───

pub fn run() {
    let app = match App::open_default() {
        Ok(app) => app,
        Err(e) => {
            error!("failed to initialize Shelfmark: {}", e);
            return;
        }
    };
    let state = Arc::new(Mutex::new(app));

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = match WindowBuilder::new()
        .with_title("Shelfmark")
        .with_inner_size(tao::dpi::LogicalSize::new(960.0, 720.0))
        .build(&event_loop)
    {
        Ok(w) => w,
        Err(e) => {
            error!("failed to create window: {}", e);
            return;
        }
    };

    let ipc_state = state.clone();
    let builder = WebViewBuilder::new()
        .with_custom_protocol("sm".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(shell_html().into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url("sm://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!("[IPC] {}", body.chars().take(200).collect::<String>());
            let mut app = lock(&ipc_state);
            if let Some(event) = handle_ipc(&mut app, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let built = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        match window.default_vbox() {
            Some(vbox) => builder.build_gtk(vbox),
            None => {
                error!("failed to get GTK vbox");
                return;
            }
        }
    };

    #[cfg(not(target_os = "linux"))]
    let built = builder.build(&window);

    let webview = match built {
        Ok(w) => w,
        Err(e) => {
            error!("failed to create WebView: {}", e);
            return;
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                lock(&state).shutdown();
                *control_flow = ControlFlow::Exit;
            }
            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }
            _ => {}
        }
    });
}

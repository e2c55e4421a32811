//! Shelfmark RPC Server: JSON-RPC over stdin/stdout for headless front ends.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"route", "params":{"hash":"#/2"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr so stdout carries protocol messages only.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use log::{error, info, warn};
use serde_json::{json, Value};

use shelfmark::app::App;
use shelfmark::rpc_handler::handle_method;
use shelfmark::types::settings::AppSettings;

const DEFAULT_LOGGING: &str = "info,shelfmark=info";

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn respond(response: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOGGING)).init();

    // SHELFMARK_DATA_DIR overrides the platform data directory.
    let opened = match std::env::var("SHELFMARK_DATA_DIR") {
        Ok(dir) => {
            let dir = std::path::PathBuf::from(dir);
            if let Err(e) = std::fs::create_dir_all(&dir) {
                warn!("cannot create {}: {}", dir.display(), e);
            }
            let db_path = dir.join(AppSettings::default().database_file);
            App::new(&db_path.to_string_lossy())
        }
        Err(_) => App::open_default(),
    };
    let mut app = match opened {
        Ok(app) => app,
        Err(e) => {
            error!("failed to initialize: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = app.startup() {
        error!("failed to render initial view: {}", e);
    }
    let app = Mutex::new(app);
    info!("serving JSON-RPC on stdin/stdout");

    respond(json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    let mut rate_limiter = RateLimiter::new(200);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            warn!("rate limit exceeded");
            respond(json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(response)?;
    }

    if let Ok(mut a) = app.lock() {
        a.shutdown();
    }
    Ok(())
}

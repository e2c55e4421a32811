//! Shelfmark UI layer.
//!
//! Uses `wry` for the WebView (WebView2 on Windows, WebKitGTK on Linux,
//! WKWebView on macOS). Pages are rendered in Rust; the WebView only shows
//! the HTML and reports user input back over IPC.

pub mod webview_app;

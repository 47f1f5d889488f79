//! Browser console logging.
//!
//! Thin wrappers over `console.debug` / `console.warn` so call sites pass
//! plain `&str` messages. Every message is prefixed with `[filebar]` to
//! make the toolbar's output easy to filter in devtools. Off the web the
//! messages go to stderr.

const PREFIX: &str = "[filebar]";

/// Log a diagnostic message at debug level.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(&format!("{PREFIX} {message}")));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{PREFIX} debug: {message}");
}

/// Log a recoverable problem at warn level.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("{PREFIX} {message}")));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{PREFIX} warn: {message}");
}

//! Browser console logging.
//!
//! Writes through `web_sys::console` on wasm32. Native builds (unit tests)
//! have no console to write to, so the calls compile to nothing there.

/// Log a debug line to the browser console.
#[allow(unused_variables)]
pub fn debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&msg.into());
}

/// Log a warning to the browser console.
#[allow(unused_variables)]
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
}

//! Console logging.
//!
//! In the browser this goes to `console.log` / `console.warn` via web-sys.
//! Native builds (tests, tools) print to stderr instead, since the JS imports
//! do not exist there.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(msg: &str) {
    eprintln!("[sph] {msg}");
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[sph] warning: {msg}");
}

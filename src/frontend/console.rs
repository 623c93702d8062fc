//! Browser console logging. Debug lines only show with `?debug=1`.

use std::sync::atomic::{AtomicBool, Ordering};
use web_sys::window;

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

pub fn init_debug_from_url() {
    let Some(search) = window().and_then(|w| w.location().search().ok()) else {
        return;
    };

    if search.contains("debug=1") || search.contains("debug=true") {
        DEBUG_MODE.store(true, Ordering::Relaxed);
        web_sys::console::info_1(&"[clean-code] debug logging enabled".into());
    }
}

pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

pub fn debug(msg: &str) {
    if is_debug() {
        web_sys::console::log_1(&msg.into());
    }
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

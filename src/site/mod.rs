//! Target-independent state and content. The client build and the static
//! server each use a different slice of it; modules only the client renders
//! from are exempt from dead-code lints on the server build.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod accordion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod lifecycle;
pub mod metadata;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod progress;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod sections;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub mod viewport;

//! WebAssembly bindings for tocspy.
//!
//! This crate keeps a documentation page's table-of-contents sidebar in sync
//! with the reader's position. All decisions are made by `tocspy-core`; this
//! crate only adapts the live DOM to the core's page traits and forwards
//! browser events to the tracker.
//!
//! ## Module Structure
//!
//! - [`spy`] - `TocSpy` handle and `autoAttach` entry point
//! - [`dom`] - `web-sys` implementation of the page traits
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { autoAttach } from '@tocspy/wasm';
//!
//! await init();
//! autoAttach();
//! ```
//!
//! # Browser Support
//!
//! Requires `IntersectionObserver` with `rootMargin` support (all evergreen
//! browsers).

pub mod dom;
pub mod error;
pub mod spy;

pub use dom::{DomAnchor, DomLink, DomPage};
pub use error::{ErrorCode, SpyError};
pub use spy::{TocSpy, auto_attach};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for readable messages in the browser console. Called
/// automatically by wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the tocspy-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

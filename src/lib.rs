//! # tocspy
//!
//! Keeps the table-of-contents entry of the section being read highlighted.
//!
//! The decision logic lives in [`tocspy_core`] and is re-exported here. Browser
//! pages use the `tocspy-wasm` bindings; every other host can drive a
//! [`NativeSession`], which pairs an [`InMemoryPage`] with a
//! [`CrossingDetector`] in place of the browser's intersection observer.

pub use tocspy_core::*;

pub mod session;

pub use session::NativeSession;

//! Error handling for WASM bindings.
//!
//! Converts tracker errors into JavaScript `Error` objects carrying a `code`.

use thiserror::Error;
use tocspy_core::TrackerError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration object
    Config,
    /// A DOM query or class-list write threw
    Dom,
    /// `attachRequired` found no TOC container
    MissingToc,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::MissingToc => "MISSING_TOC",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a `wasm_bindgen` struct: it converts into a plain JS `Error` instead.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SpyError {
    code: ErrorCode,
    message: String,
}

impl SpyError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TrackerError> for SpyError {
    fn from(err: TrackerError) -> Self {
        let code = match &err {
            TrackerError::MissingToc { .. } => ErrorCode::MissingToc,
            TrackerError::InvalidConfig(_) | TrackerError::Json(_) => ErrorCode::Config,
            TrackerError::Dom(_) => ErrorCode::Dom,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SpyError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid configuration object: {}", err))
    }
}

impl From<SpyError> for JsValue {
    fn from(err: SpyError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(err.code.as_str())).ok();
        js_error.into()
    }
}

/// Renders a thrown JS value for logs and error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Maps a thrown JS value into a tracker error.
pub(crate) fn dom_error(context: &str, value: JsValue) -> TrackerError {
    TrackerError::Dom(format!("{}: {}", context, describe(&value)))
}

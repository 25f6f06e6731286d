//! Error types for tracker construction and host adapters.

use thiserror::Error;

/// The main error enum for tocspy operations.
///
/// None of these can occur once a tracker is running: event handling never
/// fails, it only logs. They surface from configuration loading, from
/// fail-fast resolution, and from host adapters reading the page.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("No table of contents matches '{selector}'")]
    MissingToc { selector: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Page access failed: {0}")]
    Dom(String),
}

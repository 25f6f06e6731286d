//! # tocspy-core
//!
//! Platform-agnostic core of the table-of-contents active-section tracker.
//!
//! - **page**: Traits a host implements to expose TOC links and content anchors
//! - **config**: Selectors, offsets and the marker class
//! - **resolve**: One-time capture of links and anchors, plus the initial scan
//! - **scan**: Selection of the most recently passed section heading
//! - **tracker**: The `SectionTracker` controller owning the active name
//! - **crossing**: Band-crossing detection for hosts without an intersection observer
//! - **memory**: An in-memory page for tests and non-browser hosts
//! - **error**: Error types
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. It never touches a DOM
//! directly; the browser binding (and the in-memory page) implement the
//! [`Page`] trait and feed events into the [`SectionTracker`].

pub use tocspy_types as types;

pub mod config;
pub mod crossing;
pub mod error;
pub mod memory;
pub mod page;
pub mod resolve;
pub mod scan;
pub mod tracker;

pub use types::{FragmentId, VerticalSpan, ViewportBand};

pub use config::TrackerConfig;
pub use crossing::CrossingDetector;
pub use error::TrackerError;
pub use memory::{InMemoryPage, MemoryAnchor, MemoryLink};
pub use page::{ContentAnchor, Page, TocLink, TrackedAnchor, track_all};
pub use resolve::{Resolution, Resolved, resolve, resolve_required};
pub use scan::most_recently_passed;
pub use tracker::{IntersectionEntry, SectionTracker};

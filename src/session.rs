//! A tracker driven without a browser.

use tocspy_core::{
    CrossingDetector, FragmentId, InMemoryPage, MemoryAnchor, MemoryLink, Resolution, Resolved,
    SectionTracker, TrackedAnchor, TrackerConfig, TrackerError, resolve,
};

/// An attached tracker over an [`InMemoryPage`].
///
/// Plays the role of the browser: scrolling re-measures the anchors and
/// delivers crossing entries, navigation delivers the new hash. Like an
/// intersection observer, attaching delivers one initial batch for every
/// anchor already inside the band, after the initial scan has run.
#[derive(Debug)]
pub struct NativeSession {
    page: InMemoryPage,
    tracker: SectionTracker<MemoryLink>,
    anchors: Vec<TrackedAnchor<MemoryAnchor>>,
    detector: CrossingDetector,
}

impl NativeSession {
    /// Attaches to `page`. Returns `Ok(None)` when the page has no TOC.
    pub fn attach(page: InMemoryPage, config: &TrackerConfig) -> Result<Option<Self>, TrackerError> {
        config.validate()?;
        let Resolved {
            tracker,
            anchors,
            band,
            ..
        } = match resolve(&page, config)? {
            Resolution::Enabled(resolved) => resolved,
            Resolution::Disabled => return Ok(None),
        };

        let mut session = Self {
            page,
            tracker,
            anchors,
            detector: CrossingDetector::new(band),
        };
        session.deliver_crossings();
        Ok(Some(session))
    }

    /// Scrolls down by `dy` pixels (negative scrolls up) and delivers the
    /// resulting crossings. Returns whether the active section changed.
    pub fn scroll_by(&mut self, dy: f64) -> bool {
        self.page.scroll_by(dy);
        self.deliver_crossings()
    }

    /// Simulates the location fragment changing to `hash`.
    pub fn navigate(&mut self, hash: &str) -> bool {
        self.tracker.on_hash_change(hash)
    }

    pub fn set_active(&mut self, name: &str) -> bool {
        self.tracker.set_active(FragmentId::new(name))
    }

    pub fn active(&self) -> Option<&FragmentId> {
        self.tracker.active()
    }

    pub fn page(&self) -> &InMemoryPage {
        &self.page
    }

    pub fn watched(&self) -> &[TrackedAnchor<MemoryAnchor>] {
        &self.anchors
    }

    fn deliver_crossings(&mut self) -> bool {
        let entries = self
            .detector
            .observe(&self.anchors, self.page.viewport_height());
        if entries.is_empty() {
            return false;
        }
        log::trace!("Delivering {} crossing entr(ies)", entries.len());
        self.tracker.on_intersections(entries)
    }
}

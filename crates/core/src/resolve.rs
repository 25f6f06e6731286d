//! One-time resolution of a page into a running tracker.
//!
//! Resolution captures the TOC links and the trackable content anchors once,
//! measures the header, runs the initial scan and applies its result. After
//! that the host only has to forward events to the returned tracker and
//! observe the returned anchors against the returned band.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::page::{Page, TrackedAnchor, track_all};
use crate::scan::most_recently_passed;
use crate::tracker::SectionTracker;
use tocspy_types::ViewportBand;

/// Everything a host needs to keep a page's TOC in sync.
#[derive(Debug)]
pub struct Resolved<L, A> {
    pub tracker: SectionTracker<L>,
    /// Anchors to watch for band crossings, in document order.
    pub anchors: Vec<TrackedAnchor<A>>,
    pub band: ViewportBand,
}

/// Outcome of resolving a page.
#[derive(Debug)]
pub enum Resolution<L, A> {
    /// The page has no TOC. Nothing was captured or modified.
    Disabled,
    Enabled(Resolved<L, A>),
}

impl<L, A> Resolution<L, A> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Resolution::Enabled(_))
    }

    pub fn into_resolved(self) -> Option<Resolved<L, A>> {
        match self {
            Resolution::Enabled(resolved) => Some(resolved),
            Resolution::Disabled => None,
        }
    }
}

/// Resolves `page`, treating a missing TOC as a normal, disabled outcome.
pub fn resolve<P: Page>(
    page: &P,
    config: &TrackerConfig,
) -> Result<Resolution<P::Link, P::Anchor>, TrackerError> {
    if !page.has_toc()? {
        log::debug!("No '{}' on this page, tracker disabled", config.toc_selector);
        return Ok(Resolution::Disabled);
    }

    let header_height = page.header_height()?.unwrap_or(0.0);
    let links = page.toc_links()?;
    let anchors = track_all(page.content_anchors()?);
    log::debug!(
        "Resolved {} TOC link(s), {} content anchor(s), header {}px",
        links.len(),
        anchors.len(),
        header_height
    );

    let mut tracker = SectionTracker::new(links, config.active_class.clone());
    let threshold = config.threshold(header_height);
    match most_recently_passed(&anchors, threshold) {
        Some(initial) => {
            tracker.set_active(initial.fragment.clone());
        }
        None => {
            log::debug!("No section above {}px yet, nothing active", threshold);
            if tracker.clear() {
                log::debug!("Removed a marker left by an earlier tracker");
            }
        }
    }

    Ok(Resolution::Enabled(Resolved {
        tracker,
        anchors,
        band: config.band(header_height),
    }))
}

/// Resolves `page`, failing when the TOC is absent.
pub fn resolve_required<P: Page>(
    page: &P,
    config: &TrackerConfig,
) -> Result<Resolved<P::Link, P::Anchor>, TrackerError> {
    resolve(page, config)?
        .into_resolved()
        .ok_or_else(|| TrackerError::MissingToc {
            selector: config.toc_selector.clone(),
        })
}

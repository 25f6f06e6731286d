//! Page abstraction traits.
//!
//! These traits let the tracker work against any host that can answer four
//! questions about a rendered page: is there a TOC, how tall is the fixed
//! header, which links does the TOC contain, and where are the content
//! anchors. The browser binding implements them over `web-sys`; the
//! [`InMemoryPage`](crate::memory::InMemoryPage) implements them for tests.

use crate::error::TrackerError;
use tocspy_types::{FragmentId, VerticalSpan};

/// A navigational link in the TOC.
pub trait TocLink {
    /// The raw `href` attribute value, if the element has one.
    fn href(&self) -> Option<String>;

    /// Whether the link currently carries the marker class.
    fn has_marker(&self, class: &str) -> bool;

    /// Add (`on = true`) or remove the marker class on this link.
    fn set_marker(&self, class: &str, on: bool) -> Result<(), TrackerError>;
}

/// A jump target in the main content.
pub trait ContentAnchor {
    /// The `id` of the anchor's parent element. `None` or an empty string
    /// means the anchor cannot be navigated to.
    fn parent_id(&self) -> Option<String>;

    /// Current viewport-relative vertical extent.
    fn bounds(&self) -> VerticalSpan;

    fn top(&self) -> f64 {
        self.bounds().top
    }
}

/// A rendered page the tracker can be resolved against.
pub trait Page {
    type Link: TocLink;
    type Anchor: ContentAnchor;

    /// Whether the TOC container is present.
    fn has_toc(&self) -> Result<bool, TrackerError>;

    /// Rendered height of the fixed header, or `None` if there is no header.
    fn header_height(&self) -> Result<Option<f64>, TrackerError>;

    /// All links inside the TOC, in document order.
    fn toc_links(&self) -> Result<Vec<Self::Link>, TrackerError>;

    /// All content anchors, in document order.
    fn content_anchors(&self) -> Result<Vec<Self::Anchor>, TrackerError>;
}

/// A content anchor that passed the parent-id filter, paired with the
/// fragment it activates.
#[derive(Debug, Clone)]
pub struct TrackedAnchor<A> {
    pub fragment: FragmentId,
    pub anchor: A,
}

impl<A: ContentAnchor> TrackedAnchor<A> {
    /// Wraps `anchor` if its parent carries a non-empty id.
    pub fn track(anchor: A) -> Option<Self> {
        let id = anchor.parent_id().filter(|id| !id.is_empty())?;
        Some(Self {
            fragment: FragmentId::from_element_id(&id),
            anchor,
        })
    }

    pub fn bounds(&self) -> VerticalSpan {
        self.anchor.bounds()
    }
}

/// Filters anchors down to the ones that can become active, keeping order.
pub fn track_all<A: ContentAnchor>(anchors: Vec<A>) -> Vec<TrackedAnchor<A>> {
    let total = anchors.len();
    let tracked: Vec<_> = anchors.into_iter().filter_map(TrackedAnchor::track).collect();
    if tracked.len() < total {
        log::debug!(
            "Skipping {} content anchor(s) without a parent id",
            total - tracked.len()
        );
    }
    tracked
}

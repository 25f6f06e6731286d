//! Band-crossing detection.
//!
//! Browsers report visibility transitions through `IntersectionObserver`.
//! Hosts without one (native tests, benchmarks, custom renderers) can feed the
//! tracker from a `CrossingDetector` instead: call [`CrossingDetector::observe`]
//! after every scroll or layout change and pass the result to
//! [`SectionTracker::on_intersections`](crate::tracker::SectionTracker::on_intersections).

use crate::page::{ContentAnchor, TrackedAnchor};
use crate::tracker::IntersectionEntry;
use tocspy_types::ViewportBand;

/// Remembers which anchors were inside the band at the previous observation.
#[derive(Debug, Clone)]
pub struct CrossingDetector {
    band: ViewportBand,
    inside: Vec<bool>,
}

impl CrossingDetector {
    pub fn new(band: ViewportBand) -> Self {
        Self {
            band,
            inside: Vec::new(),
        }
    }

    /// Reports every anchor whose band membership changed since the last call,
    /// in document order.
    ///
    /// The first call treats every anchor as previously outside, so it reports
    /// exactly the anchors that start inside the band. `anchors` must be the
    /// same list, in the same order, on every call; if its length changes the
    /// remembered state is reset.
    pub fn observe<A: ContentAnchor>(
        &mut self,
        anchors: &[TrackedAnchor<A>],
        viewport_height: f64,
    ) -> Vec<IntersectionEntry> {
        if self.inside.len() != anchors.len() {
            self.inside = vec![false; anchors.len()];
        }

        let mut entries = Vec::new();
        for (tracked, was_inside) in anchors.iter().zip(self.inside.iter_mut()) {
            let now_inside = self.band.intersects(tracked.bounds(), viewport_height);
            if now_inside != *was_inside {
                *was_inside = now_inside;
                entries.push(IntersectionEntry {
                    target: tracked.fragment.clone(),
                    is_intersecting: now_inside,
                });
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryPage;
    use crate::page::{Page, track_all};
    use tocspy_types::FragmentId;

    fn page() -> InMemoryPage {
        // Band on an 800px viewport with a 60px header: [60, 200].
        InMemoryPage::new()
            .with_header(60.0)
            .with_anchor("one", 100.0)
            .with_anchor("two", 500.0)
            .with_anchor("three", 1200.0)
    }

    #[test]
    fn test_first_observation_reports_anchors_inside() {
        let page = page();
        let anchors = track_all(page.content_anchors().unwrap());
        let mut detector = CrossingDetector::new(ViewportBand::new(60.0, 0.75));

        let entries = detector.observe(&anchors, page.viewport_height());

        assert_eq!(
            entries,
            vec![IntersectionEntry::entering(FragmentId::new("#one"))]
        );
    }

    #[test]
    fn test_steady_state_reports_nothing() {
        let page = page();
        let anchors = track_all(page.content_anchors().unwrap());
        let mut detector = CrossingDetector::new(ViewportBand::new(60.0, 0.75));

        detector.observe(&anchors, page.viewport_height());
        page.scroll_by(10.0);

        assert!(detector.observe(&anchors, page.viewport_height()).is_empty());
    }

    #[test]
    fn test_scrolling_reports_leave_and_enter() {
        let page = page();
        let anchors = track_all(page.content_anchors().unwrap());
        let mut detector = CrossingDetector::new(ViewportBand::new(60.0, 0.75));
        detector.observe(&anchors, page.viewport_height());

        // one: 100 -> -300, two: 500 -> 100
        page.scroll_by(400.0);
        let entries = detector.observe(&anchors, page.viewport_height());

        assert_eq!(
            entries,
            vec![
                IntersectionEntry::leaving(FragmentId::new("#one")),
                IntersectionEntry::entering(FragmentId::new("#two")),
            ]
        );
    }

    #[test]
    fn test_fast_scroll_skips_over_band() {
        let page = page();
        let anchors = track_all(page.content_anchors().unwrap());
        let mut detector = CrossingDetector::new(ViewportBand::new(60.0, 0.75));
        detector.observe(&anchors, page.viewport_height());

        // two jumps from 500 to -500 without ever sampling inside the band.
        page.scroll_by(1000.0);
        let entries = detector.observe(&anchors, page.viewport_height());

        assert_eq!(
            entries,
            vec![
                IntersectionEntry::leaving(FragmentId::new("#one")),
                IntersectionEntry::entering(FragmentId::new("#three")),
            ]
        );
    }

    #[test]
    fn test_resets_when_anchor_list_changes() {
        let page = page();
        let anchors = track_all(page.content_anchors().unwrap());
        let mut detector = CrossingDetector::new(ViewportBand::new(60.0, 0.75));
        detector.observe(&anchors, page.viewport_height());

        let fewer = &anchors[..1];
        let entries = detector.observe(fewer, page.viewport_height());

        assert_eq!(
            entries,
            vec![IntersectionEntry::entering(FragmentId::new("#one"))]
        );
    }
}

//! Initial section selection.

use crate::page::{ContentAnchor, TrackedAnchor};

/// Finds the most recently passed section heading.
///
/// Among anchors whose top edge lies strictly above `threshold`, returns the
/// one with the greatest top edge. Ties go to the earliest anchor in document
/// order. Returns `None` when nothing has been scrolled past yet.
pub fn most_recently_passed<A: ContentAnchor>(
    anchors: &[TrackedAnchor<A>],
    threshold: f64,
) -> Option<&TrackedAnchor<A>> {
    let mut lowest: Option<(&TrackedAnchor<A>, f64)> = None;
    for tracked in anchors {
        let top = tracked.anchor.top();
        if top >= threshold {
            continue;
        }
        match lowest {
            Some((_, best)) if top <= best => {}
            _ => lowest = Some((tracked, top)),
        }
    }
    lowest.map(|(tracked, _)| tracked)
}

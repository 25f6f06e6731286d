//! The active-section controller.
//!
//! A `SectionTracker` owns the active name for one page view and the fixed set
//! of TOC links resolved at startup. Both event sources (hash navigation and
//! band crossings) funnel into [`SectionTracker::set_active`], which keeps the
//! marker on exactly the link whose `href` equals the active name.

use crate::page::TocLink;
use tocspy_types::FragmentId;

/// One entry of a visibility-crossing notification batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Fragment of the anchor the entry reports on.
    pub target: FragmentId,
    /// Whether the anchor is inside the observation band after the change.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(target: FragmentId) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: FragmentId) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

#[derive(Debug)]
pub struct SectionTracker<L> {
    links: Vec<L>,
    active: Option<FragmentId>,
    marker_class: String,
}

impl<L: TocLink> SectionTracker<L> {
    /// Creates a tracker with nothing active. No link is touched.
    pub fn new(links: Vec<L>, marker_class: impl Into<String>) -> Self {
        Self {
            links,
            active: None,
            marker_class: marker_class.into(),
        }
    }

    pub fn active(&self) -> Option<&FragmentId> {
        self.active.as_ref()
    }

    pub fn links(&self) -> &[L] {
        &self.links
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    /// Makes `name` the active section.
    ///
    /// Returns `false` without touching any link when `name` is already
    /// active. Otherwise records it and rewrites the marker on every link.
    /// A link whose marker write fails is logged and skipped; the remaining
    /// links are still updated.
    pub fn set_active(&mut self, name: FragmentId) -> bool {
        if self.active.as_ref() == Some(&name) {
            return false;
        }
        log::debug!("Active section: {}", name);

        for link in &self.links {
            let on = link.href().is_some_and(|href| name.matches_href(&href));
            if let Err(e) = link.set_marker(&self.marker_class, on) {
                log::warn!("Failed to update TOC link marker for {}: {}", name, e);
            }
        }
        self.active = Some(name);
        true
    }

    /// Forgets the active section and removes the marker from every link that
    /// still carries it, such as one left behind by an earlier tracker on the
    /// same page. Links without the marker are not touched.
    ///
    /// Returns whether any marker was removed.
    pub fn clear(&mut self) -> bool {
        self.active = None;
        let mut cleared = false;
        for link in &self.links {
            if !link.has_marker(&self.marker_class) {
                continue;
            }
            if let Err(e) = link.set_marker(&self.marker_class, false) {
                log::warn!("Failed to clear stale TOC link marker: {}", e);
            }
            cleared = true;
        }
        cleared
    }

    /// Handles a change of the location fragment. No geometry is consulted.
    pub fn on_hash_change(&mut self, hash: &str) -> bool {
        self.set_active(FragmentId::new(hash))
    }

    /// Handles a batch of crossing notifications in delivery order.
    ///
    /// Every entry that reports entering the band activates its target, so
    /// the last such entry in the batch wins. Returns whether the active name
    /// changed at any point.
    pub fn on_intersections<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let mut changed = false;
        for entry in entries {
            if !entry.is_intersecting {
                log::trace!("Ignoring {} leaving the band", entry.target);
                continue;
            }
            changed |= self.set_active(entry.target);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLink;

    fn tracker(hrefs: &[&str]) -> SectionTracker<MemoryLink> {
        let links = hrefs.iter().map(|href| MemoryLink::new(Some(*href))).collect();
        SectionTracker::new(links, "active")
    }

    fn marked(tracker: &SectionTracker<MemoryLink>) -> Vec<String> {
        tracker
            .links()
            .iter()
            .filter(|link| link.has_class("active"))
            .filter_map(|link| link.href())
            .collect()
    }

    #[test]
    fn test_new_tracker_marks_nothing() {
        let tracker = tracker(&["#a", "#b"]);

        assert!(tracker.active().is_none());
        assert!(marked(&tracker).is_empty());
        assert!(tracker.links().iter().all(|link| link.writes() == 0));
    }

    #[test]
    fn test_set_active_moves_marker() {
        let mut tracker = tracker(&["#a", "#b", "#c"]);

        assert!(tracker.set_active(FragmentId::new("#b")));
        assert_eq!(marked(&tracker), vec!["#b"]);

        assert!(tracker.set_active(FragmentId::new("#c")));
        assert_eq!(marked(&tracker), vec!["#c"]);
        assert_eq!(tracker.active().unwrap(), "#c");
    }

    #[test]
    fn test_clear_removes_only_existing_markers() {
        let mut tracker = tracker(&["#a", "#b", "#c"]);
        tracker.set_active(FragmentId::new("#b"));
        let writes: Vec<usize> = tracker.links().iter().map(MemoryLink::writes).collect();

        assert!(tracker.clear());

        assert!(tracker.active().is_none());
        assert!(marked(&tracker).is_empty());
        assert_eq!(tracker.links()[0].writes(), writes[0]);
        assert_eq!(tracker.links()[1].writes(), writes[1] + 1);
        assert!(!tracker.clear());
    }

    #[test]
    fn test_set_active_same_name_is_noop() {
        let mut tracker = tracker(&["#a", "#b"]);
        tracker.set_active(FragmentId::new("#a"));
        let writes: Vec<usize> = tracker.links().iter().map(MemoryLink::writes).collect();

        assert!(!tracker.set_active(FragmentId::new("#a")));

        let after: Vec<usize> = tracker.links().iter().map(MemoryLink::writes).collect();
        assert_eq!(writes, after);
        assert_eq!(marked(&tracker), vec!["#a"]);
    }

    #[test]
    fn test_unknown_name_clears_marker() {
        let mut tracker = tracker(&["#a", "#b"]);
        tracker.set_active(FragmentId::new("#a"));

        assert!(tracker.set_active(FragmentId::new("#nowhere")));
        assert!(marked(&tracker).is_empty());
        assert_eq!(tracker.active().unwrap(), "#nowhere");
    }

    #[test]
    fn test_link_without_href_never_marked() {
        let links = vec![MemoryLink::new(None), MemoryLink::new(Some("#a"))];
        let mut tracker = SectionTracker::new(links, "active");

        tracker.set_active(FragmentId::new(""));
        assert!(!tracker.links()[0].has_class("active"));
        tracker.set_active(FragmentId::new("#a"));
        assert!(!tracker.links()[0].has_class("active"));
        assert!(tracker.links()[1].has_class("active"));
    }

    #[test]
    fn test_duplicate_hrefs_are_all_marked() {
        // Two links to the same section is a page authoring choice; both follow it.
        let mut tracker = tracker(&["#a", "#b", "#a"]);

        tracker.set_active(FragmentId::new("#a"));
        assert_eq!(marked(&tracker), vec!["#a", "#a"]);
    }

    #[test]
    fn test_hash_change_is_verbatim() {
        let mut tracker = tracker(&["#a", "#b"]);

        tracker.on_hash_change("#b");
        assert_eq!(marked(&tracker), vec!["#b"]);

        tracker.on_hash_change("");
        assert!(marked(&tracker).is_empty());
        assert_eq!(tracker.active().unwrap(), "");
    }

    #[test]
    fn test_intersections_last_entering_wins() {
        let mut tracker = tracker(&["#a", "#b", "#c"]);

        let changed = tracker.on_intersections(vec![
            IntersectionEntry::entering(FragmentId::new("#c")),
            IntersectionEntry::leaving(FragmentId::new("#b")),
            IntersectionEntry::entering(FragmentId::new("#a")),
            IntersectionEntry::leaving(FragmentId::new("#c")),
        ]);

        assert!(changed);
        assert_eq!(marked(&tracker), vec!["#a"]);
    }

    #[test]
    fn test_intersections_only_leaving_changes_nothing() {
        let mut tracker = tracker(&["#a", "#b"]);
        tracker.set_active(FragmentId::new("#a"));

        let changed = tracker.on_intersections(vec![IntersectionEntry::leaving(
            FragmentId::new("#a"),
        )]);

        assert!(!changed);
        assert_eq!(marked(&tracker), vec!["#a"]);
    }

    #[test]
    fn test_custom_marker_class() {
        let links = vec![MemoryLink::new(Some("#a"))];
        let mut tracker = SectionTracker::new(links, "current");

        tracker.set_active(FragmentId::new("#a"));
        assert!(tracker.links()[0].has_class("current"));
        assert!(!tracker.links()[0].has_class("active"));
    }
}

//! An in-memory page.
//!
//! Stands in for a rendered document where no browser is available: native
//! tests, benchmarks, and hosts that lay out content themselves. Link and
//! anchor handles share their state with the page that created them (they are
//! reference-counted), so a tracker holding the links and the page observing
//! them see the same class lists, just as DOM element handles would.

use crate::error::TrackerError;
use crate::page::{ContentAnchor, Page, TocLink};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;
use tocspy_types::VerticalSpan;

/// Height given to anchors created from a single top coordinate.
pub const DEFAULT_ANCHOR_HEIGHT: f64 = 24.0;

#[derive(Debug)]
struct LinkState {
    href: Option<String>,
    classes: RefCell<BTreeSet<String>>,
    writes: Cell<usize>,
}

/// A TOC link handle with a class list and a write counter.
#[derive(Debug, Clone)]
pub struct MemoryLink(Rc<LinkState>);

impl MemoryLink {
    pub fn new(href: Option<&str>) -> Self {
        Self(Rc::new(LinkState {
            href: href.map(str::to_string),
            classes: RefCell::new(BTreeSet::new()),
            writes: Cell::new(0),
        }))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    /// Number of class-list writes performed on this link.
    pub fn writes(&self) -> usize {
        self.0.writes.get()
    }
}

impl TocLink for MemoryLink {
    fn href(&self) -> Option<String> {
        self.0.href.clone()
    }

    fn has_marker(&self, class: &str) -> bool {
        self.has_class(class)
    }

    fn set_marker(&self, class: &str, on: bool) -> Result<(), TrackerError> {
        let mut classes = self.0.classes.borrow_mut();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        self.0.writes.set(self.0.writes.get() + 1);
        Ok(())
    }
}

#[derive(Debug)]
struct AnchorState {
    parent_id: Option<String>,
    span: Cell<VerticalSpan>,
}

/// A content anchor handle with a movable position.
#[derive(Debug, Clone)]
pub struct MemoryAnchor(Rc<AnchorState>);

impl MemoryAnchor {
    pub fn new(parent_id: Option<&str>, top: f64) -> Self {
        Self::with_span(parent_id, VerticalSpan::at(top, DEFAULT_ANCHOR_HEIGHT))
    }

    pub fn with_span(parent_id: Option<&str>, span: VerticalSpan) -> Self {
        Self(Rc::new(AnchorState {
            parent_id: parent_id.map(str::to_string),
            span: Cell::new(span),
        }))
    }

    pub fn move_by(&self, dy: f64) {
        self.0.span.set(self.0.span.get().offset(dy));
    }
}

impl ContentAnchor for MemoryAnchor {
    fn parent_id(&self) -> Option<String> {
        self.0.parent_id.clone()
    }

    fn bounds(&self) -> VerticalSpan {
        self.0.span.get()
    }
}

/// A page described entirely in memory.
///
/// ```
/// use tocspy_core::InMemoryPage;
///
/// let page = InMemoryPage::new()
///     .with_header(60.0)
///     .with_link("#intro")
///     .with_anchor("intro", 120.0);
/// assert_eq!(page.links().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryPage {
    toc: bool,
    header_height: Option<f64>,
    viewport_height: f64,
    links: Vec<MemoryLink>,
    anchors: Vec<MemoryAnchor>,
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPage {
    /// An empty page that has a TOC container, no header, and an 800px viewport.
    pub fn new() -> Self {
        Self {
            toc: true,
            header_height: None,
            viewport_height: 800.0,
            links: Vec::new(),
            anchors: Vec::new(),
        }
    }

    /// Removes the TOC container. Links added afterwards are still kept, as
    /// stray anchors elsewhere on the page would be.
    pub fn without_toc(mut self) -> Self {
        self.toc = false;
        self
    }

    pub fn with_header(mut self, height: f64) -> Self {
        self.header_height = Some(height);
        self
    }

    pub fn with_viewport_height(mut self, height: f64) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_link(mut self, href: &str) -> Self {
        self.links.push(MemoryLink::new(Some(href)));
        self
    }

    pub fn with_links<'a>(mut self, hrefs: impl IntoIterator<Item = &'a str>) -> Self {
        self.links
            .extend(hrefs.into_iter().map(|href| MemoryLink::new(Some(href))));
        self
    }

    /// Adds an anchor whose parent has `parent_id`, with its top at `top`.
    pub fn with_anchor(mut self, parent_id: &str, top: f64) -> Self {
        self.anchors.push(MemoryAnchor::new(Some(parent_id), top));
        self
    }

    /// Adds an anchor whose parent carries no id.
    pub fn with_unidentified_anchor(mut self, top: f64) -> Self {
        self.anchors.push(MemoryAnchor::new(None, top));
        self
    }

    /// Scrolls the page down by `dy` pixels; every anchor moves up by `dy`.
    pub fn scroll_by(&self, dy: f64) {
        for anchor in &self.anchors {
            anchor.move_by(-dy);
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn links(&self) -> &[MemoryLink] {
        &self.links
    }

    /// `href`s of the links currently carrying `class`, in document order.
    pub fn marked_links(&self, class: &str) -> Vec<String> {
        self.links
            .iter()
            .filter(|link| link.has_class(class))
            .filter_map(TocLink::href)
            .collect()
    }

    /// Total class-list writes across all links.
    pub fn total_writes(&self) -> usize {
        self.links.iter().map(MemoryLink::writes).sum()
    }
}

impl Page for InMemoryPage {
    type Link = MemoryLink;
    type Anchor = MemoryAnchor;

    fn has_toc(&self) -> Result<bool, TrackerError> {
        Ok(self.toc)
    }

    fn header_height(&self) -> Result<Option<f64>, TrackerError> {
        Ok(self.header_height)
    }

    fn toc_links(&self) -> Result<Vec<MemoryLink>, TrackerError> {
        Ok(self.links.clone())
    }

    fn content_anchors(&self) -> Result<Vec<MemoryAnchor>, TrackerError> {
        Ok(self.anchors.clone())
    }
}

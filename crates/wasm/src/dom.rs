//! `web-sys` implementation of the page traits.

use crate::error::dom_error;
use tocspy_core::{ContentAnchor, Page, TocLink, TrackerConfig, TrackerError};
use tocspy_types::VerticalSpan;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A TOC link element.
#[derive(Debug, Clone)]
pub struct DomLink(Element);

impl DomLink {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl TocLink for DomLink {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn has_marker(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_marker(&self, class: &str, on: bool) -> Result<(), TrackerError> {
        let classes = self.0.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(|e| dom_error("classList update failed", e))
    }
}

/// A content anchor element. Its position is read live on every call.
#[derive(Debug, Clone)]
pub struct DomAnchor(Element);

impl DomAnchor {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl ContentAnchor for DomAnchor {
    fn parent_id(&self) -> Option<String> {
        self.0.parent_element().map(|parent| parent.id())
    }

    fn bounds(&self) -> VerticalSpan {
        let rect = self.0.get_bounding_client_rect();
        VerticalSpan::new(rect.top(), rect.bottom())
    }
}

/// A live document queried with the configured selectors.
pub struct DomPage<'a> {
    document: Document,
    config: &'a TrackerConfig,
}

impl<'a> DomPage<'a> {
    pub fn new(document: Document, config: &'a TrackerConfig) -> Self {
        Self { document, config }
    }

    fn query(&self, selector: &str) -> Result<Option<Element>, TrackerError> {
        self.document
            .query_selector(selector)
            .map_err(|e| dom_error(&format!("querySelector('{}') failed", selector), e))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, TrackerError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| dom_error(&format!("querySelectorAll('{}') failed", selector), e))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl Page for DomPage<'_> {
    type Link = DomLink;
    type Anchor = DomAnchor;

    fn has_toc(&self) -> Result<bool, TrackerError> {
        Ok(self.query(&self.config.toc_selector)?.is_some())
    }

    fn header_height(&self) -> Result<Option<f64>, TrackerError> {
        let Some(header) = self.query(&self.config.header_selector)? else {
            return Ok(None);
        };
        let height = match header.dyn_ref::<HtmlElement>() {
            Some(html) => f64::from(html.offset_height()),
            // SVG and other non-HTML elements have no offsetHeight.
            None => header.get_bounding_client_rect().height(),
        };
        Ok(Some(height))
    }

    fn toc_links(&self) -> Result<Vec<DomLink>, TrackerError> {
        Ok(self
            .query_all(&self.config.link_selector)?
            .into_iter()
            .map(DomLink)
            .collect())
    }

    fn content_anchors(&self) -> Result<Vec<DomAnchor>, TrackerError> {
        Ok(self
            .query_all(&self.config.anchor_selector)?
            .into_iter()
            .map(DomAnchor)
            .collect())
    }
}

//! Viewport-relative geometry.
//!
//! All coordinates are CSS pixels relative to the top of the viewport, the
//! same frame `getBoundingClientRect()` reports in. Negative values are above
//! the visible area.

use serde::{Deserialize, Serialize};

/// The vertical extent of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalSpan {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// A span of the given height starting at `top`.
    pub fn at(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn is_empty(self) -> bool {
        self.bottom < self.top
    }

    /// Shift the span by `dy` pixels, as scrolling the page by `-dy` would.
    pub fn offset(self, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
        }
    }

    /// Whether two spans overlap. Edge-adjacent spans count as overlapping,
    /// matching how intersection observers treat zero-area intersections.
    pub fn overlaps(self, other: VerticalSpan) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

/// The region of the viewport in which a content anchor counts as "being read".
///
/// It starts `top_inset_px` below the viewport top (the fixed header hides
/// everything above) and ends `bottom_inset_fraction` of the viewport height
/// above the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBand {
    pub top_inset_px: f64,
    pub bottom_inset_fraction: f64,
}

impl ViewportBand {
    pub fn new(top_inset_px: f64, bottom_inset_fraction: f64) -> Self {
        Self {
            top_inset_px,
            bottom_inset_fraction,
        }
    }

    /// The band for a viewport of the given height.
    ///
    /// When the header is taller than the part of the viewport left after the
    /// bottom inset, the returned span is empty and nothing can intersect it.
    pub fn span(self, viewport_height: f64) -> VerticalSpan {
        VerticalSpan {
            top: self.top_inset_px,
            bottom: viewport_height * (1.0 - self.bottom_inset_fraction),
        }
    }

    pub fn intersects(self, element: VerticalSpan, viewport_height: f64) -> bool {
        self.span(viewport_height).overlaps(element)
    }

    /// The band expressed as an `IntersectionObserver` `rootMargin`.
    pub fn root_margin(self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_inset_px,
            self.bottom_inset_fraction * 100.0
        )
    }
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_inset_px: 0.0,
            bottom_inset_fraction: 0.75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_format() {
        assert_eq!(ViewportBand::new(60.0, 0.75).root_margin(), "-60px 0px -75% 0px");
        assert_eq!(ViewportBand::new(0.0, 0.75).root_margin(), "-0px 0px -75% 0px");
        assert_eq!(ViewportBand::new(48.5, 0.5).root_margin(), "-48.5px 0px -50% 0px");
    }

    #[test]
    fn test_band_span_for_viewport() {
        let band = ViewportBand::new(60.0, 0.75);
        let span = band.span(800.0);

        assert_eq!(span.top, 60.0);
        assert_eq!(span.bottom, 200.0);
    }

    #[test]
    fn test_intersection_inside_and_outside() {
        let band = ViewportBand::new(60.0, 0.75);

        assert!(band.intersects(VerticalSpan::at(100.0, 20.0), 800.0));
        // Straddling the top edge still intersects.
        assert!(band.intersects(VerticalSpan::at(50.0, 20.0), 800.0));
        assert!(!band.intersects(VerticalSpan::at(10.0, 20.0), 800.0));
        assert!(!band.intersects(VerticalSpan::at(300.0, 20.0), 800.0));
    }

    #[test]
    fn test_edge_adjacent_counts_as_intersecting() {
        let band = ViewportBand::new(60.0, 0.75);

        assert!(band.intersects(VerticalSpan::at(40.0, 20.0), 800.0));
        assert!(band.intersects(VerticalSpan::at(200.0, 20.0), 800.0));
    }

    #[test]
    fn test_collapsed_band_intersects_nothing() {
        // 300px header on a 400px viewport leaves top=300, bottom=100.
        let band = ViewportBand::new(300.0, 0.75);

        assert!(band.span(400.0).is_empty());
        assert!(!band.intersects(VerticalSpan::at(150.0, 20.0), 400.0));
    }

    #[test]
    fn test_offset_moves_both_edges() {
        let span = VerticalSpan::at(100.0, 24.0).offset(-150.0);

        assert_eq!(span.top, -50.0);
        assert_eq!(span.bottom, -26.0);
        assert_eq!(span.height(), 24.0);
    }
}

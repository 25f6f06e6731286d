//! Tracker configuration.
//!
//! Every field has a default matching the usual documentation-site layout:
//! a `.toc` sidebar, content anchors under `.content main`, and a fixed
//! `.menu-bar` header. A page only needs to override what differs.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};
use tocspy_types::ViewportBand;

/// Selectors, offsets and the marker class used by a tracker.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Container whose presence enables the tracker.
    pub toc_selector: String,
    /// Navigational links inside the TOC.
    pub link_selector: String,
    /// Jump targets in the main content; each is identified by its parent's `id`.
    pub anchor_selector: String,
    /// Fixed header whose rendered height offsets the reading position.
    pub header_selector: String,
    /// How far below the header a heading may sit and still count as passed.
    pub look_ahead_px: f64,
    /// Share of the viewport height, measured from the bottom, excluded from
    /// the observation band.
    pub bottom_inset_fraction: f64,
    /// Class token toggled on the active link.
    pub active_class: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            toc_selector: ".toc".to_string(),
            link_selector: ".toc a".to_string(),
            anchor_selector: ".content main a".to_string(),
            header_selector: ".menu-bar".to_string(),
            look_ahead_px: 140.0,
            bottom_inset_fraction: 0.75,
            active_class: "active".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parses and validates a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a class-list or observer call would reject.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.active_class.is_empty() {
            return Err(TrackerError::InvalidConfig(
                "activeClass must not be empty".to_string(),
            ));
        }
        if self.active_class.chars().any(char::is_whitespace) {
            return Err(TrackerError::InvalidConfig(format!(
                "activeClass must be a single class token, got '{}'",
                self.active_class
            )));
        }
        if !(0.0..=1.0).contains(&self.bottom_inset_fraction) {
            return Err(TrackerError::InvalidConfig(format!(
                "bottomInsetFraction must be within [0, 1], got {}",
                self.bottom_inset_fraction
            )));
        }
        if !self.look_ahead_px.is_finite() {
            return Err(TrackerError::InvalidConfig(
                "lookAheadPx must be a finite number".to_string(),
            ));
        }
        for (name, selector) in [
            ("tocSelector", &self.toc_selector),
            ("linkSelector", &self.link_selector),
            ("anchorSelector", &self.anchor_selector),
            ("headerSelector", &self.header_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(TrackerError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// The initial-scan threshold for a header of the given height.
    pub fn threshold(&self, header_height: f64) -> f64 {
        header_height + self.look_ahead_px
    }

    /// The observation band for a header of the given height.
    pub fn band(&self, header_height: f64) -> ViewportBand {
        ViewportBand::new(header_height, self.bottom_inset_fraction)
    }
}

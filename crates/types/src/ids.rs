//! Newtype wrapper for fragment identifiers.
//!
//! A fragment identifier is the `#name` part of a URL. TOC links carry one in
//! their `href`, the location hash carries one after in-page navigation, and a
//! content anchor produces one from the `id` of its parent element. All three
//! are compared by exact string equality, leading `#` included.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The `#name` identifier of an in-page navigation target.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentId(Arc<str>);

impl FragmentId {
    /// Creates a FragmentId from a raw value, taken verbatim.
    ///
    /// Use this for values that already carry their `#` (link `href`s,
    /// `location.hash`). An empty string is a legal value: it is what the
    /// location reports once the fragment has been cleared, and it matches no
    /// link.
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self(raw.into())
    }

    /// Creates the FragmentId that targets the element with the given `id`.
    pub fn from_element_id(id: &str) -> Self {
        Self(format!("#{id}").into())
    }

    /// Returns the string representation, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this fragment matches an `href` attribute value exactly.
    pub fn matches_href(&self, href: &str) -> bool {
        &*self.0 == href
    }
}

impl From<String> for FragmentId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for FragmentId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for FragmentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FragmentId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for FragmentId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id_creation() {
        let id1 = FragmentId::new("#section-1");
        let id2 = FragmentId::from("#section-1");
        let id3 = FragmentId::from(String::from("#section-1"));
        let id4 = FragmentId::from_element_id("section-1");

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id3, id4);
        assert_eq!(id1.as_str(), "#section-1");
    }

    #[test]
    fn test_matching_is_exact() {
        let id = FragmentId::from_element_id("s2");

        assert!(id.matches_href("#s2"));
        assert!(!id.matches_href("s2"));
        assert!(!id.matches_href("#S2"));
        assert!(!id.matches_href("#s2 "));
        assert!(!id.matches_href("page.html#s2"));
    }

    #[test]
    fn test_empty_fragment_matches_nothing_but_empty() {
        let id = FragmentId::new("");

        assert!(!id.matches_href("#"));
        assert!(id.matches_href(""));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = FragmentId::from_element_id("usage");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"#usage\"");

        let back: FragmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

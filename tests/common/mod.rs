pub mod fixtures;

use tocspy::{InMemoryPage, TrackerConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts the at-most-one-active and consistency invariants for a page whose
/// links all have distinct `href`s.
pub fn assert_consistent(page: &InMemoryPage, config: &TrackerConfig, active: Option<&str>) {
    let marked = page.marked_links(&config.active_class);
    assert!(
        marked.len() <= 1,
        "at most one link may be marked, found {:?}",
        marked
    );
    if let Some(href) = marked.first() {
        assert_eq!(
            Some(href.as_str()),
            active,
            "marked link must match the active name"
        );
    }
    if let Some(name) = active {
        let expected = page
            .links()
            .iter()
            .any(|link| tocspy::TocLink::href(link).as_deref() == Some(name));
        assert_eq!(
            !marked.is_empty(),
            expected,
            "a link is marked exactly when one matches '{}'",
            name
        );
    }
}

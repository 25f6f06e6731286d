use serde_json::{Value, json};
use tocspy::InMemoryPage;

/// The three-section page from the threshold scenario: a 60px header and
/// anchors at -50, 120 and 300px.
pub fn threshold_page() -> InMemoryPage {
    InMemoryPage::new()
        .with_header(60.0)
        .with_links(["#s1", "#s2", "#s3"])
        .with_anchor("s1", -50.0)
        .with_anchor("s2", 120.0)
        .with_anchor("s3", 300.0)
}

/// A long documentation page loaded at the top: sections every 600px,
/// starting below the band.
pub fn long_page(sections: usize) -> InMemoryPage {
    let ids: Vec<String> = (1..=sections).map(|i| format!("section-{}", i)).collect();
    let hrefs: Vec<String> = ids.iter().map(|id| format!("#{}", id)).collect();

    let mut page = InMemoryPage::new()
        .with_header(60.0)
        .with_links(hrefs.iter().map(String::as_str));
    for (i, id) in ids.iter().enumerate() {
        page = page.with_anchor(id, 400.0 + 600.0 * i as f64);
    }
    page
}

/// A configuration object as a site would embed it in its page.
pub fn site_config() -> Value {
    json!({
        "tocSelector": "#sidebar",
        "linkSelector": "#sidebar a",
        "headerSelector": "header.sticky",
        "activeClass": "is-current",
        "lookAheadPx": 100
    })
}

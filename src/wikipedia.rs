//! Wikipedia-specific cleanup.
//!
//! Wikipedia articles carry a lot of chrome inside the content area
//! (navboxes, infoboxes, reference lists, edit links). These are stripped
//! before rendering, and the content root is fixed to the parser output
//! container.

use dom_query::{Document, Selection};

use crate::dom;
use crate::url_utils;

/// Host substrings identifying a Wikipedia page.
const WIKIPEDIA_HOSTS: [&str; 2] = ["wikipedia.org", "wikipedia.com"];

/// Boilerplate containers removed from Wikipedia pages.
pub const BOILERPLATE_SELECTORS: [&str; 20] = [
    "div.mw-jump-link",
    "div.mw-editsection",
    "div.navbox",
    "div.vertical-navbox",
    "div.sidebar",
    "div.sistersitebox",
    "div.metadata",
    "table.metadata",
    "div.reflist",
    "div.refbegin",
    "div.mw-references-wrap",
    "div#toc",
    "div.toc",
    "div.infobox",
    "table.infobox",
    "div.thumb",
    "div.mbox-small",
    "table.ambox",
    "div.sister-wikipedia",
    "div.mw-authority-control",
];

/// True when the URL's host contains a Wikipedia domain.
///
/// This is a substring test on the host, not a suffix match.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::wikipedia::is_wikipedia_page;
///
/// assert!(is_wikipedia_page("https://en.wikipedia.org/wiki/Rust"));
/// assert!(is_wikipedia_page("https://foo.wikipedia.com/"));
/// assert!(!is_wikipedia_page("https://wikipediafake.org/"));
/// ```
#[must_use]
pub fn is_wikipedia_page(url: &str) -> bool {
    url_utils::host(url).is_some_and(|host| WIKIPEDIA_HOSTS.iter().any(|domain| host.contains(domain)))
}

/// Remove the fixed list of boilerplate containers.
pub fn strip_boilerplate(doc: &Document) {
    for selector in BOILERPLATE_SELECTORS {
        dom::remove_matching(doc, selector);
    }
}

/// Remove "edit section" affordances.
///
/// A `span` or `div` is removed when its class contains `editsection`, or
/// when its trimmed text is wrapped in square brackets and it contains a
/// link whose `href` contains `/edit`. The second form catches localised
/// labels (`[edit]`, `[modifier]`, `[bearbeiten]`, ...).
///
/// Returns the number of elements removed.
pub fn remove_edit_links(doc: &Document) -> usize {
    let doomed: Vec<Selection> = doc
        .select("span, div")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(is_edit_affordance)
        .collect();

    let count = doomed.len();
    for sel in doomed {
        sel.remove();
    }
    count
}

fn is_edit_affordance(sel: &Selection) -> bool {
    if dom::class_contains(sel, "editsection") {
        return true;
    }

    let text = sel.text();
    let text = text.trim();
    if !(text.starts_with('[') && text.ends_with(']')) {
        return false;
    }

    sel.select("a[href]")
        .nodes()
        .iter()
        .any(|link| dom::node_attr(*link, "href").contains("/edit"))
}

/// The `div.mw-parser-output` inside `#mw-content-text`, if both exist in
/// `scope`.
#[must_use]
pub fn content_root<'a>(scope: &Selection<'a>) -> Option<Selection<'a>> {
    let Some(container) = dom::self_or_first_match(scope, "#mw-content-text") else {
        tracing::debug!("no #mw-content-text container");
        return None;
    };

    let parser_output = dom::first_match(&container, "div.mw-parser-output");
    if parser_output.is_none() {
        tracing::debug!("no div.mw-parser-output inside #mw-content-text");
    }
    parser_output
}

//! Result types for extraction output.
//!
//! An extraction produces the rendered text and a flat metadata record
//! built from the page's `<title>` and `<meta>` tags.

use indexmap::IndexMap;
use serde::Serialize;

/// Metadata extracted from an HTML document.
///
/// String fields are empty when the page does not declare them. The map
/// fields keep insertion (document) order so that rendered bullet lists
/// follow the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Text of the first `<title>` element.
    pub title: String,

    /// `<meta name="description">`.
    pub description: String,

    /// `<meta name="keywords">`.
    pub keywords: String,

    /// `<meta name="author">`.
    pub author: String,

    /// Open Graph properties keyed by the suffix after `og:`.
    pub og_tags: IndexMap<String, String>,

    /// Twitter card properties keyed by the suffix after `twitter:`.
    pub twitter_cards: IndexMap<String, String>,

    /// Any other named meta tag with non-empty content.
    pub other_meta: IndexMap<String, String>,
}

impl Metadata {
    /// True when no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.keywords.is_empty()
            && self.author.is_empty()
            && self.og_tags.is_empty()
            && self.twitter_cards.is_empty()
            && self.other_meta.is_empty()
    }
}

/// Result of extracting text from a page.
///
/// `ExtractResult::default()` (empty content, empty metadata) is what the
/// pipeline returns when extraction fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    /// Rendered content followed by the `## Metadata` block.
    pub content: String,

    /// Metadata record for the page.
    pub metadata: Metadata,
}

impl ExtractResult {
    /// True when nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

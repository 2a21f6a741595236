//! Metadata extraction module.
//!
//! Builds the [`Metadata`] record for a page from its `<title>` and
//! `<meta>` elements.

pub mod meta_tags;

use dom_query::{Document, Selection};

use crate::dom;
use crate::result::Metadata;
use crate::url_utils::percent_decode;

pub use meta_tags::{classify, examine_meta, MetaTarget};

/// Extract all metadata from a document.
///
/// Pure read: the document is not modified.
///
/// # Example
///
/// ```rust
/// use webpage_fetcher::{dom, metadata::extract_metadata};
///
/// let doc = dom::parse(r#"<html><head><title> Home </title>
/// <meta name="author" content="Jane"></head></html>"#);
/// let metadata = extract_metadata(&doc);
/// assert_eq!(metadata.title, "Home");
/// assert_eq!(metadata.author, "Jane");
/// ```
#[must_use]
pub fn extract_metadata(doc: &Document) -> Metadata {
    extract_metadata_in(&dom::document_scope(doc))
}

/// Extract metadata from the `<title>` and `<meta>` elements inside
/// `scope` only.
#[must_use]
pub fn extract_metadata_in(scope: &Selection) -> Metadata {
    let metadata = examine_title(scope, Metadata::default());
    examine_meta(scope, metadata)
}

/// Fill `title` from the first `<title>` element inside `scope`.
#[must_use]
pub fn examine_title(scope: &Selection, original: Metadata) -> Metadata {
    let mut result = original;

    let titles = scope.select("title");
    if let Some(node) = titles.nodes().first() {
        result.title = percent_decode(node.text().trim());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_decoded() {
        let doc = dom::parse("<html><head><title>\n  50%25 Sale  \n</title></head></html>");
        assert_eq!(extract_metadata(&doc).title, "50% Sale");
    }

    #[test]
    fn first_title_wins() {
        let doc = dom::parse("<html><head><title>One</title><title>Two</title></head></html>");
        assert_eq!(extract_metadata(&doc).title, "One");
    }

    #[test]
    fn document_without_head_metadata_is_empty() {
        let doc = dom::parse("<p>just text</p>");
        assert!(extract_metadata(&doc).is_empty());
    }

    #[test]
    fn scoped_extraction_ignores_outside_tags() {
        let doc = dom::parse(
            r#"<html><head><title>Page</title><meta name="author" content="Head"></head>
               <body><div class="post"><meta name="author" content="Post"></div></body></html>"#,
        );
        let post = doc.select(".post");
        let metadata = extract_metadata_in(&post);
        assert_eq!(metadata.title, "");
        assert_eq!(metadata.author, "Post");
    }

    #[test]
    fn title_and_meta_combine() {
        let doc = dom::parse(
            r#"<html><head><title>Page</title>
               <meta property="og:site_name" content="Site">
               <meta name="twitter:creator" content="@me"></head><body></body></html>"#,
        );
        let metadata = extract_metadata(&doc);
        assert_eq!(metadata.title, "Page");
        assert_eq!(metadata.og_tags.get("site_name").map(String::as_str), Some("Site"));
        assert_eq!(metadata.other_meta.get("twitter:creator").map(String::as_str), Some("@me"));
    }
}

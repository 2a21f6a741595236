//! HTML Meta Tag Extraction
//!
//! Classifies `<meta>` elements into the fixed metadata fields, Open Graph
//! properties, Twitter cards, or the catch-all `other_meta` map.

use dom_query::Selection;

use crate::dom;
use crate::result::Metadata;
use crate::url_utils::percent_decode;

const OPEN_GRAPH_PREFIX: &str = "og:";
const TWITTER_PREFIX: &str = "twitter:";

/// Where a single `<meta>` tag's content belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaTarget<'a> {
    /// `name="description"`
    Description,
    /// `name="keywords"`
    Keywords,
    /// `name="author"`
    Author,
    /// `property="og:<key>"`
    OpenGraph(&'a str),
    /// `property="twitter:<key>"`
    TwitterCard(&'a str),
    /// Any other `name` with non-empty content.
    Other(&'a str),
    /// Nothing to record.
    Skip,
}

/// Classify a meta tag from its lowercased `name` and `property`.
///
/// Name-based rules are checked before property-based ones, so a tag
/// carrying both `name="description"` and `property="og:title"` is a
/// description.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::metadata::meta_tags::{classify, MetaTarget};
///
/// assert_eq!(classify("description", "og:title", "X"), MetaTarget::Description);
/// assert_eq!(classify("", "og:image", "x.png"), MetaTarget::OpenGraph("image"));
/// assert_eq!(classify("viewport", "", ""), MetaTarget::Skip);
/// ```
#[must_use]
pub fn classify<'a>(name: &'a str, property: &'a str, content: &str) -> MetaTarget<'a> {
    match name {
        "description" => return MetaTarget::Description,
        "keywords" => return MetaTarget::Keywords,
        "author" => return MetaTarget::Author,
        _ => {}
    }

    if let Some(key) = property.strip_prefix(OPEN_GRAPH_PREFIX) {
        MetaTarget::OpenGraph(key)
    } else if let Some(key) = property.strip_prefix(TWITTER_PREFIX) {
        MetaTarget::TwitterCard(key)
    } else if !name.is_empty() && !content.is_empty() {
        MetaTarget::Other(name)
    } else {
        MetaTarget::Skip
    }
}

/// Examine every `<meta>` element inside `scope`, in document order.
///
/// Missing `name`, `property` or `content` attributes read as empty
/// strings. Stored values are percent-decoded. A repeated key keeps its
/// first position and takes the last value.
#[must_use]
pub fn examine_meta(scope: &Selection, original: Metadata) -> Metadata {
    let mut result = original;

    for node in scope.select("meta").nodes() {
        let meta = Selection::from(*node);

        let name = dom::attr_or_empty(&meta, "name").to_lowercase();
        let property = dom::attr_or_empty(&meta, "property").to_lowercase();
        let content = dom::attr_or_empty(&meta, "content");

        match classify(&name, &property, &content) {
            MetaTarget::Description => result.description = percent_decode(&content),
            MetaTarget::Keywords => result.keywords = percent_decode(&content),
            MetaTarget::Author => result.author = percent_decode(&content),
            MetaTarget::OpenGraph(key) => {
                result.og_tags.insert(key.to_string(), percent_decode(&content));
            }
            MetaTarget::TwitterCard(key) => {
                result.twitter_cards.insert(key.to_string(), percent_decode(&content));
            }
            MetaTarget::Other(key) => {
                result.other_meta.insert(key.to_string(), percent_decode(&content));
            }
            MetaTarget::Skip => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examine(html: &str) -> Metadata {
        let doc = dom::parse(html);
        examine_meta(&dom::document_scope(&doc), Metadata::default())
    }

    #[test]
    fn name_rules_win_over_property_rules() {
        let md = examine(r#"<meta property="og:title" name="description" content="X">"#);
        assert_eq!(md.description, "X");
        assert!(md.og_tags.is_empty());
    }

    #[test]
    fn standard_fields() {
        let md = examine(
            r#"<meta name="description" content="About">
               <meta name="keywords" content="a, b">
               <meta name="author" content="Jane Roe">"#,
        );
        assert_eq!(md.description, "About");
        assert_eq!(md.keywords, "a, b");
        assert_eq!(md.author, "Jane Roe");
    }

    #[test]
    fn names_and_properties_are_case_insensitive() {
        let md = examine(
            r#"<meta NAME="Description" content="D">
               <meta property="OG:Type" content="article">"#,
        );
        assert_eq!(md.description, "D");
        assert_eq!(md.og_tags.get("type").map(String::as_str), Some("article"));
    }

    #[test]
    fn open_graph_and_twitter_keys_drop_prefix() {
        let md = examine(
            r#"<meta property="og:title" content="T">
               <meta property="og:image" content="https://x.test/i.png">
               <meta property="twitter:card" content="summary">"#,
        );
        let og: Vec<(&str, &str)> = md.og_tags.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(og, vec![("title", "T"), ("image", "https://x.test/i.png")]);
        assert_eq!(md.twitter_cards.get("card").map(String::as_str), Some("summary"));
    }

    #[test]
    fn twitter_declared_via_name_goes_to_other_meta() {
        let md = examine(r#"<meta name="twitter:card" content="summary">"#);
        assert!(md.twitter_cards.is_empty());
        assert_eq!(md.other_meta.get("twitter:card").map(String::as_str), Some("summary"));
    }

    #[test]
    fn other_meta_needs_name_and_content() {
        let md = examine(
            r#"<meta charset="utf-8">
               <meta name="robots" content="index">
               <meta name="empty" content="">
               <meta content="orphan">"#,
        );
        assert_eq!(md.other_meta.len(), 1);
        assert_eq!(md.other_meta.get("robots").map(String::as_str), Some("index"));
    }

    #[test]
    fn missing_content_is_empty_not_an_error() {
        let md = examine(r#"<meta name="author"><meta property="og:url">"#);
        assert_eq!(md.author, "");
        assert_eq!(md.og_tags.get("url").map(String::as_str), Some(""));
    }

    #[test]
    fn values_are_percent_decoded() {
        let md = examine(
            r#"<meta name="description" content="caf%C3%A9 menu">
               <meta property="og:url" content="https://x.test/a%20b">
               <meta name="generator" content="%FF broken">"#,
        );
        assert_eq!(md.description, "café menu");
        assert_eq!(md.og_tags.get("url").map(String::as_str), Some("https://x.test/a b"));
        assert_eq!(md.other_meta.get("generator").map(String::as_str), Some("%FF broken"));
    }

    #[test]
    fn classify_order() {
        assert_eq!(classify("keywords", "twitter:site", "k"), MetaTarget::Keywords);
        assert_eq!(classify("author", "", ""), MetaTarget::Author);
        assert_eq!(classify("", "twitter:site", ""), MetaTarget::TwitterCard("site"));
        assert_eq!(classify("theme-color", "", "#fff"), MetaTarget::Other("theme-color"));
        assert_eq!(classify("", "article:author", "x"), MetaTarget::Skip);
    }
}

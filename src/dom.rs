//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` used by the extractor: parsing, attribute
//! reads that treat missing attributes as empty strings, ancestor lookups,
//! comment pruning, search scopes and target-element selection.

pub use dom_query::{Document, NodeRef, Selection};

use dom_query::Matcher;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attributes ===

/// Read an attribute as an owned string, empty when absent.
#[must_use]
pub fn attr_or_empty(sel: &Selection, name: &str) -> String {
    sel.attr(name).map(|v| v.to_string()).unwrap_or_default()
}

/// Read an attribute of a single node, empty when absent.
#[must_use]
pub fn node_attr(node: NodeRef, name: &str) -> String {
    attr_or_empty(&Selection::from(node), name)
}

/// True when the `class` attribute contains `needle` anywhere.
///
/// This is a substring test over the raw attribute, so `mw-editsection`
/// matches `editsection`.
#[must_use]
pub fn class_contains(sel: &Selection, needle: &str) -> bool {
    sel.attr("class").is_some_and(|class| class.contains(needle))
}

// === Tag/Node Information ===

/// Lowercased tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_ascii_lowercase())
}

/// Tag name of the nearest ancestor whose tag is in `tags`.
#[must_use]
pub fn nearest_ancestor_tag(node: &NodeRef, tags: &[&str]) -> Option<String> {
    nearest_ancestor(node, tags).and_then(|anc| tag_name(&anc))
}

/// Nearest ancestor element whose tag is in `tags`.
#[must_use]
pub fn nearest_ancestor<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Option<NodeRef<'a>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if tag_name(&parent).is_some_and(|t| tags.contains(&t.as_str())) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

// === Tree Manipulation ===

/// Remove every comment node from the document.
///
/// Returns the number of comments removed.
pub fn remove_comments(doc: &Document) -> usize {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();

    let count = comments.len();
    for comment in comments {
        Selection::from(comment).remove();
    }
    count
}

/// Remove every element matching `selector` along with its subtree.
pub fn remove_matching(doc: &Document, selector: &str) {
    doc.select(selector).remove();
}

/// First element matching `selector`, if any.
#[must_use]
pub fn first_match<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

// === Scopes ===

/// The whole document as a selection rooted at the document node.
#[must_use]
pub fn document_scope(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

/// `scope` itself when it is an element matching `selector`, otherwise
/// its first matching descendant.
#[must_use]
pub fn self_or_first_match<'a>(scope: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let is_element = scope.nodes().first().is_some_and(NodeRef::is_element);
    if is_element && scope.is(selector) {
        return scope.nodes().first().map(|node| Selection::from(*node));
    }
    first_match(scope, selector)
}

/// First element matching `selector`, used when only one element of the
/// page should be extracted.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] when `selector` does not parse and
/// [`Error::ElementNotFound`] when it matches nothing.
pub fn find_target<'a>(doc: &'a Document, selector: &str) -> Result<Selection<'a>> {
    let matcher =
        Matcher::new(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))?;
    let matches = doc.select_matcher(&matcher);
    matches
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
        .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
}

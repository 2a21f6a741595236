//! Element renderer.
//!
//! Walks a DOM subtree and produces Markdown-flavoured text using the
//! tables in [`crate::rules`]. Children are concatenated with no separator
//! and trimmed; a formatted element with no rendered content contributes
//! nothing, not even its prefix or suffix.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::options::{Options, DEFAULT_MAX_DEPTH};
use crate::rules::{self, FormatRule};
use crate::url_utils::percent_decode;

const LIST_TAGS: [&str; 2] = ["ul", "ol"];
const TABLE_SECTION_TAGS: [&str; 4] = ["thead", "tbody", "tfoot", "table"];

/// Render the first node of `sel`.
///
/// An empty selection renders as an empty string. `keep_unknown` controls
/// whether elements with no formatting rule keep their text.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::{dom, render::render_element};
///
/// let doc = dom::parse(r#"<a href="https://x.test">Click</a>"#);
/// assert_eq!(render_element(&doc.select("a"), false), "[Click](https://x.test)");
/// ```
#[must_use]
pub fn render_element(sel: &Selection, keep_unknown: bool) -> String {
    Renderer::new(keep_unknown, DEFAULT_MAX_DEPTH).render(sel)
}

/// Renderer settings for one extraction call.
///
/// The walk uses an explicit stack of open elements, so nesting depth is
/// limited only by `max_depth`, never by the thread's call stack.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    keep_unknown: bool,
    max_depth: usize,
}

/// An element whose children are still being rendered.
struct Frame<'a> {
    node: NodeRef<'a>,
    tag: String,
    rule: Option<FormatRule>,
    children: Vec<NodeRef<'a>>,
    next: usize,
    depth: usize,
    out: String,
}

enum Step<'a> {
    Done(String),
    Open(Frame<'a>),
}

impl Renderer {
    /// Create a renderer.
    #[must_use]
    pub fn new(keep_unknown: bool, max_depth: usize) -> Self {
        Self {
            keep_unknown,
            max_depth,
        }
    }

    /// Create a renderer from extraction options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.keep_unknown, options.max_depth)
    }

    /// Render the first node of `sel`, or nothing for an empty selection.
    #[must_use]
    pub fn render(&self, sel: &Selection) -> String {
        let Some(root) = sel.nodes().first().copied() else {
            return String::new();
        };

        let mut warned = false;
        let mut stack = match self.enter(root, 0, &mut warned) {
            Step::Done(text) => return text,
            Step::Open(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.children.get(frame.next).copied() {
                frame.next += 1;
                match self.enter(child, frame.depth + 1, &mut warned) {
                    Step::Done(text) => frame.out.push_str(&text),
                    Step::Open(open) => stack.push(open),
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let text = finish(&done);
            match stack.last_mut() {
                Some(parent) => parent.out.push_str(&text),
                None => return text,
            }
        }

        String::new()
    }

    /// Classify a node: leaves and dropped subtrees render immediately,
    /// everything else opens a frame for its children.
    fn enter<'a>(&self, node: NodeRef<'a>, depth: usize, warned: &mut bool) -> Step<'a> {
        if node.is_text() {
            return Step::Done(percent_decode(&node.text()).trim().to_string());
        }

        // Comments, doctypes and the document node itself.
        let Some(tag) = dom::tag_name(&node) else {
            return Step::Done(String::new());
        };

        if rules::is_ignored(&tag) {
            return Step::Done(String::new());
        }

        if depth >= self.max_depth {
            if !*warned {
                *warned = true;
                tracing::warn!(max_depth = self.max_depth, tag = %tag, "nesting too deep, dropping subtree");
            }
            return Step::Done(String::new());
        }

        let rule = rules::format_rule(&tag);
        if rule.is_none() && !self.keep_unknown {
            return Step::Done(String::new());
        }

        Step::Open(Frame {
            node,
            tag,
            rule,
            children: node.children(),
            next: 0,
            depth,
            out: String::new(),
        })
    }
}

/// Wrap the collected children of a closed element.
fn finish(frame: &Frame) -> String {
    let content = frame.out.trim();

    // Unknown element kept for its text.
    let Some(rule) = frame.rule else {
        return content.to_string();
    };

    if content.is_empty() {
        return String::new();
    }

    match frame.tag.as_str() {
        "a" => {
            let href = dom::node_attr(frame.node, "href");
            if href.is_empty() {
                rule.wrap(content)
            } else {
                format!("[{content}]({})", percent_decode(&href))
            }
        }
        "tr" if is_header_row(&frame.node) => {
            let mut row = rule.wrap(content);
            let columns = content.matches('|').count();
            row.push('|');
            row.push_str(&"---|".repeat(columns));
            row.push('\n');
            row
        }
        "li" if is_nested_item(&frame.node) => format!("  {}", rule.wrap(content)),
        _ => rule.wrap(content),
    }
}

/// A row whose nearest table section is a `<thead>`.
fn is_header_row(node: &NodeRef) -> bool {
    dom::nearest_ancestor_tag(node, &TABLE_SECTION_TAGS).as_deref() == Some("thead")
}

/// An item whose enclosing list sits inside another list.
fn is_nested_item(node: &NodeRef) -> bool {
    dom::nearest_ancestor(node, &LIST_TAGS)
        .and_then(|list| dom::nearest_ancestor(&list, &LIST_TAGS))
        .is_some()
}

/// Collapse runs of blank lines to a single blank line.
///
/// Whitespace-only lines count as blank and are emitted empty. The result
/// is trimmed and terminated by exactly one blank line (`"\n\n"`); input
/// with no visible text yields an empty string.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::render::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb\n\n");
/// assert_eq!(collapse_blank_lines("  \n "), "");
/// ```
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len() + 2);
    out.push_str(trimmed);
    out.push_str("\n\n");
    out
}

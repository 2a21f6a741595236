//! Extraction pipeline.
//!
//! `remove_comments` → metadata → main content, then the
//! metadata block is appended to the rendered content. The public entry
//! points never fail: any error or panic inside the pipeline yields an
//! empty [`ExtractResult`].

use std::panic::{self, AssertUnwindSafe};

use dom_query::{Document, Selection};
use indexmap::IndexMap;

use crate::dom;
use crate::error::{Error, Result};
use crate::metadata::extract_metadata_in;
use crate::options::Options;
use crate::render::{collapse_blank_lines, Renderer};
use crate::result::{ExtractResult, Metadata};
use crate::wikipedia;

/// Containers tried, in order, as the main content root of a generic page.
pub const MAIN_CONTENT_SELECTORS: [&str; 8] = [
    "main",
    "article",
    r#"[role="main"]"#,
    "#main-content",
    "#content",
    ".content",
    "#main",
    ".main",
];

/// Extract text and metadata from an HTML string.
///
/// Never fails; an empty result means nothing could be extracted.
#[must_use]
pub fn extract_text(html: &str, options: &Options) -> ExtractResult {
    let doc = dom::parse(html);
    extract_document(&doc, options)
}

/// Extract text and metadata from a parsed document.
///
/// The document is pruned in place (comments, scripts, Wikipedia
/// boilerplate). Never fails; an empty result means nothing could be
/// extracted. A panic inside the pipeline is caught and reported with one
/// warning, after the process panic hook has printed its own message.
#[must_use]
pub fn extract_document(doc: &Document, options: &Options) -> ExtractResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(doc, options)));

    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "error during content extraction");
            ExtractResult::default()
        }
        Err(_) => {
            tracing::warn!("error during content extraction");
            ExtractResult::default()
        }
    }
}

fn run_pipeline(doc: &Document, options: &Options) -> Result<ExtractResult> {
    let removed = dom::remove_comments(doc);
    tracing::debug!(removed, "removed comment nodes");

    let scope = content_scope(doc, options)?;
    let metadata = extract_metadata_in(&scope);
    let content = render_main_content(doc, &scope, options)?;

    if content.trim().is_empty() {
        tracing::warn!("no content extracted from the page");
    }

    let mut full = content;
    full.push_str(&render_metadata_block(&metadata));
    let full = full.trim().to_string();

    Ok(ExtractResult {
        content: full,
        metadata,
    })
}

/// Render the main content of a page.
///
/// Wikipedia URLs (see [`wikipedia::is_wikipedia_page`]) use the Wikipedia
/// path; everything else the generic one. With
/// [`Options::target_element`] set, containers are looked up inside that
/// element only, the element itself included. The result has runs of blank
/// lines collapsed and ends with one blank line, or is empty.
///
/// # Errors
///
/// Returns [`Error::NoContentRoot`] when a generic page has neither a
/// recognised content container nor a `<body>` in scope, and the
/// target-element errors of [`dom::find_target`].
pub fn extract_main_content(doc: &Document, options: &Options) -> Result<String> {
    let scope = content_scope(doc, options)?;
    render_main_content(doc, &scope, options)
}

/// The part of the document extraction looks at.
fn content_scope<'a>(doc: &'a Document, options: &Options) -> Result<Selection<'a>> {
    match options.target_element.as_deref() {
        Some(selector) => {
            tracing::debug!(selector, "restricting extraction to target element");
            dom::find_target(doc, selector)
        }
        None => Ok(dom::document_scope(doc)),
    }
}

fn render_main_content(doc: &Document, scope: &Selection, options: &Options) -> Result<String> {
    let renderer = Renderer::from_options(options);

    if options.url.as_deref().is_some_and(wikipedia::is_wikipedia_page) {
        tracing::debug!("using Wikipedia extraction");
        return Ok(extract_wikipedia_content(doc, scope, &renderer));
    }

    dom::remove_matching(doc, "script, style, noscript");

    let Some(root) = find_main_content(scope) else {
        tracing::error!("no main content container and no body found");
        return Err(Error::NoContentRoot);
    };

    Ok(collapse_blank_lines(&renderer.render(&root)))
}

/// First matching main content container in `scope`, falling back to
/// `<body>`.
#[must_use]
pub fn find_main_content<'a>(scope: &Selection<'a>) -> Option<Selection<'a>> {
    for selector in MAIN_CONTENT_SELECTORS {
        if let Some(found) = dom::self_or_first_match(scope, selector) {
            tracing::debug!(selector, "found main content container");
            return Some(found);
        }
    }

    dom::self_or_first_match(scope, "body").inspect(|_| tracing::debug!("falling back to body"))
}

fn extract_wikipedia_content(doc: &Document, scope: &Selection, renderer: &Renderer) -> String {
    wikipedia::strip_boilerplate(doc);
    let removed = wikipedia::remove_edit_links(doc);
    tracing::debug!(removed, "removed edit-section links");

    match wikipedia::content_root(scope) {
        Some(root) => collapse_blank_lines(&renderer.render(&root)),
        None => String::new(),
    }
}

/// Render the `## Metadata` block appended after the content.
///
/// Sections appear only for non-empty fields.
///
/// # Example
///
/// ```rust
/// use webpage_fetcher::{extract::render_metadata_block, Metadata};
///
/// let metadata = Metadata {
///     title: "Home".to_string(),
///     ..Metadata::default()
/// };
/// assert_eq!(render_metadata_block(&metadata), "## Metadata\n\n### Title\nHome\n\n");
/// ```
#[must_use]
pub fn render_metadata_block(metadata: &Metadata) -> String {
    let mut out = String::from("## Metadata\n\n");

    push_field(&mut out, "Title", &metadata.title);
    push_field(&mut out, "Description", &metadata.description);
    push_field(&mut out, "Keywords", &metadata.keywords);
    push_field(&mut out, "Author", &metadata.author);

    push_map(&mut out, "Open Graph Tags", &metadata.og_tags);
    push_map(&mut out, "Twitter Cards", &metadata.twitter_cards);
    push_map(&mut out, "Other Metadata", &metadata.other_meta);

    out
}

fn push_field(out: &mut String, heading: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("### {heading}\n{value}\n\n"));
    }
}

fn push_map(out: &mut String, heading: &str, entries: &IndexMap<String, String>) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("### {heading}\n"));
    for (key, value) in entries {
        out.push_str(&format!("- {key}: {value}\n"));
    }
    out.push('\n');
}

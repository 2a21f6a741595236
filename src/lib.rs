//! # webpage-fetcher
//!
//! Convert a loaded web page into structured Markdown-flavoured text plus a
//! metadata record.
//!
//! The page is rendered by walking the DOM with a fixed table of formatting
//! rules (headings, paragraphs, lists, links, GFM tables, code) and an
//! ignore set (scripts, media, form controls). Generic pages are rendered
//! from their main content container; Wikipedia pages get their navigation,
//! reference and edit-link chrome stripped first.
//!
//! ## Quick Start
//!
//! ```rust
//! use webpage_fetcher::{extract_text, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><h1>Hello</h1><p>Main content here.</p></article></body></html>"#;
//!
//! let result = extract_text(html, &Options::default());
//! assert!(result.content.starts_with("# Hello\n\nMain content here."));
//! assert!(result.content.contains("### Title\nMy Article"));
//! assert_eq!(result.metadata.title, "My Article");
//! ```
//!
//! ## Failure model
//!
//! The extraction entry points never return an error. When the pipeline
//! fails they log a warning and return an empty [`ExtractResult`], which
//! callers should treat as "no content".

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Extraction pipeline and metadata block rendering.
pub mod extract;

/// Metadata extraction from `<title>` and `<meta>`.
pub mod metadata;

/// Recursive renderer and blank-line collapsing.
pub mod render;

/// Formatting-rule table and ignore set.
pub mod rules;

/// Wikipedia detection and cleanup.
pub mod wikipedia;

/// URL utilities: percent-decoding, scheme normalisation, validation.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Output file naming and writing.
pub mod output;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, extract_main_content};
pub use metadata::extract_metadata;
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use render::render_element;
pub use result::{ExtractResult, Metadata};

/// Extract text and metadata from an HTML string.
///
/// # Example
///
/// ```rust
/// use webpage_fetcher::{extract_text, Options};
///
/// let result = extract_text("<main><p>Hi</p></main>", &Options::default());
/// assert_eq!(result.content, "Hi\n\n## Metadata");
/// ```
#[must_use]
pub fn extract_text(html: &str, options: &Options) -> ExtractResult {
    extract::extract_text(html, options)
}

/// Extract text and metadata from HTML bytes with charset detection.
///
/// The encoding is taken from a byte order mark or a `<meta>` charset
/// declaration, defaulting to UTF-8.
///
/// # Example
///
/// ```rust
/// use webpage_fetcher::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><main><p>Caf\xE9</p></main></body></html>";
/// let result = extract_bytes(html, &Options::default());
/// assert!(result.content.starts_with("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], options: &Options) -> ExtractResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_text(&html_str, options)
}

//! Configuration options for content extraction.
//!
//! `Options` carries the per-call knobs: the page URL (which selects the
//! Wikipedia cleanup path), an optional target element, whether
//! unrecognised tags keep their text, and the nesting bound for the
//! renderer.

/// Default bound on element nesting visited by the renderer.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use webpage_fetcher::Options;
///
/// let options = Options::default();
/// assert!(!options.keep_unknown);
///
/// let options = Options {
///     keep_unknown: true,
///     ..Options::default()
/// }
/// .with_url("https://en.wikipedia.org/wiki/Rust");
/// assert_eq!(options.url.as_deref(), Some("https://en.wikipedia.org/wiki/Rust"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Source URL of the page.
    ///
    /// Only used to decide whether Wikipedia-specific cleanup applies.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// CSS selector of the one element to extract from.
    ///
    /// When set, metadata and main content are looked up inside the first
    /// matching element only, the element itself included. A selector that
    /// matches nothing yields the empty result.
    ///
    /// Default: `None`
    pub target_element: Option<String>,

    /// Keep the text of elements that are neither ignored nor formatted.
    ///
    /// When `false`, unknown elements (e.g. `<b>`, `<em>`, custom tags)
    /// drop their whole subtree.
    ///
    /// Default: `false`
    pub keep_unknown: bool,

    /// Maximum element nesting depth rendered.
    ///
    /// Deeper subtrees render as empty text.
    ///
    /// Default: `512`
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            target_element: None,
            keep_unknown: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Set the source URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Restrict extraction to the first element matching `selector`.
    #[must_use]
    pub fn with_target_element(mut self, selector: impl Into<String>) -> Self {
        self.target_element = Some(selector.into());
        self
    }

    /// Set whether unknown elements keep their content.
    #[must_use]
    pub fn keep_unknown(mut self, keep: bool) -> Self {
        self.keep_unknown = keep;
        self
    }

    /// Set the renderer depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

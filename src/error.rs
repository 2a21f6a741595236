//! Error types for webpage-fetcher.
//!
//! The extraction entry points never surface these to callers (they fall
//! back to an empty result); they travel between the pipeline stages and
//! out of the file and selector helpers used by the CLI.

/// Error type for extraction and output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither a main-content container nor a `<body>` was found.
    #[error("No main content root found (no matching container and no body)")]
    NoContentRoot,

    /// A target element selector matched nothing.
    #[error("Could not find element '{0}'")]
    ElementNotFound(String),

    /// A target element selector could not be parsed.
    #[error("Invalid CSS selector '{0}'")]
    InvalidSelector(String),

    /// The page URL is not usable (no host after normalisation).
    #[error("Invalid URL '{0}'. Please provide a valid URL.")]
    InvalidUrl(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata could not be serialised.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

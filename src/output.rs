//! Output file naming and writing.
//!
//! Files are named after the page host and the capture time:
//! `{host}_{YYYYmmdd_HHMMSS}[_{element}].{ext}`. Metadata is written next to
//! the content as `{stem}_metadata.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::result::Metadata;
use crate::url_utils;

/// Longest file name most filesystems accept.
const MAX_FILENAME_LEN: usize = 255;

/// `chrono` format of the timestamp embedded in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build an output file name for a page.
///
/// Any `www.` in the host is dropped and a non-default port is kept as
/// `_port`. The element selector, when
/// given, is made filename-safe: `#` becomes `id_`, `.` becomes `class_`,
/// and anything else that is not alphanumeric or `_` becomes `_`. Names
/// longer than 255 bytes fall back to `{truncated host}_{timestamp}.{ext}`.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::output::generate_filename;
///
/// let name = generate_filename("https://www.example.com/a", "md", Some("#main .post"), "20240101_120000");
/// assert_eq!(name, "example.com_20240101_120000_id_main_class_post.md");
/// ```
#[must_use]
pub fn generate_filename(url: &str, ext: &str, element: Option<&str>, timestamp: &str) -> String {
    let host = url_utils::host_with_port(url).unwrap_or_default();
    let domain = host.replace("www.", "").replace(':', "_");

    let mut base = format!("{domain}_{timestamp}");
    if let Some(element) = element.filter(|e| !e.is_empty()) {
        base.push('_');
        base.push_str(&clean_selector(element));
    }

    let filename = format!("{base}.{ext}");
    if filename.len() <= MAX_FILENAME_LEN {
        return filename;
    }

    let suffix = format!("_{timestamp}.{ext}");
    let budget = MAX_FILENAME_LEN.saturating_sub(suffix.len());
    format!("{}{suffix}", truncate_on_char_boundary(&domain, budget))
}

fn clean_selector(selector: &str) -> String {
    selector
        .replace('#', "id_")
        .replace('.', "class_")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn truncate_on_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Create `dir` (and parents) and return the absolute path of a new output
/// file inside it, timestamped with the current local time.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the directory cannot be created or
/// resolved.
pub fn generate_output_path(dir: &Path, url: &str, ext: &str, element: Option<&str>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let dir = dir.canonicalize()?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let path = dir.join(generate_filename(url, ext, element, &timestamp));
    tracing::debug!(path = %path.display(), "generated output path");
    Ok(path)
}

/// Path of the metadata file written alongside `path`.
///
/// The last extension is replaced with `_metadata.json`; a path without
/// an extension just gets the suffix.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use webpage_fetcher::output::metadata_path;
///
/// assert_eq!(
///     metadata_path(Path::new("/tmp/example.com_20240101_120000.md")),
///     PathBuf::from("/tmp/example.com_20240101_120000_metadata.json"),
/// );
/// ```
#[must_use]
pub fn metadata_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_metadata.json"))
}

/// Write extracted text to `path`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the file cannot be written.
pub fn write_content(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Write metadata as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] or [`crate::Error::Io`] on failure.
pub fn write_metadata_json(path: &Path, metadata: &Metadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(path, json)?;
    Ok(())
}

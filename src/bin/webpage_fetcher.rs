//! # webpage-fetcher CLI
//!
//! Converts a saved web page into Markdown-flavoured text plus metadata.
//! The HTML is read from a file or stdin; the page URL drives Wikipedia
//! detection and output naming.
//!
//! ## Examples
//!
//! ```bash
//! # Write example.com_<timestamp>.md into ./out
//! curl -s https://example.com | webpage-fetcher --url example.com --filepath out
//!
//! # Print to stdout, including the metadata JSON
//! webpage-fetcher --url https://en.wikipedia.org/wiki/Rust --input rust.html \
//!     --output stdout --save-metadata
//!
//! # Only extract one element
//! webpage-fetcher --url https://example.com --input page.html --element "#content"
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use webpage_fetcher::{dom, encoding, extract_document, output, url_utils, Options, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(name = "webpage-fetcher")]
#[command(about = "Convert a web page into Markdown text and metadata")]
#[command(version)]
struct Cli {
    /// URL of the page (https:// is added when no scheme is given)
    #[arg(short, long)]
    url: String,

    /// HTML file to read (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSS selector of a single element to extract
    #[arg(short, long)]
    element: Option<String>,

    /// Where to send the extracted text
    #[arg(short, long, default_value = "file")]
    output: OutputTarget,

    /// Directory for output files
    #[arg(short, long, default_value = "./")]
    filepath: PathBuf,

    /// Render the children of unrecognised tags instead of dropping them
    #[arg(long)]
    keep_unknown: bool,

    /// Also save (or print) the metadata as JSON
    #[arg(long)]
    save_metadata: bool,

    /// Maximum element nesting depth to render
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputTarget {
    #[default]
    File,
    Stdout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let url = url_utils::ensure_scheme(&cli.url);
    if !url_utils::is_valid_url(&url) {
        return Err(webpage_fetcher::Error::InvalidUrl(cli.url.clone()).into());
    }

    let html = read_input(cli.input.as_ref())?;
    let html = encoding::transcode_to_utf8(&html);

    let doc = dom::parse(&html);

    let mut options = Options::default()
        .with_url(url.clone())
        .keep_unknown(cli.keep_unknown)
        .with_max_depth(cli.max_depth);
    if let Some(selector) = cli.element.as_deref() {
        options = options.with_target_element(selector);
    }

    let result = extract_document(&doc, &options);
    if result.content.is_empty() {
        tracing::error!("No content captured");
        return Ok(ExitCode::FAILURE);
    }

    match cli.output {
        OutputTarget::File => {
            let path = output::generate_output_path(&cli.filepath, &url, "md", cli.element.as_deref())
                .with_context(|| format!("Failed to prepare output directory {}", cli.filepath.display()))?;
            output::write_content(&path, &result.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Successfully saved content to: {}", path.display());

            if cli.save_metadata {
                let metadata_path = output::metadata_path(&path);
                output::write_metadata_json(&metadata_path, &result.metadata)
                    .with_context(|| format!("Failed to write {}", metadata_path.display()))?;
                info!("Saved metadata to: {}", metadata_path.display());
            }
        }
        OutputTarget::Stdout => {
            println!("{}", result.content);
            if cli.save_metadata {
                let json = serde_json::to_string_pretty(&result.metadata)
                    .context("Failed to serialise metadata")?;
                println!("\n=== Metadata ===\n");
                println!("{json}");
                println!("\n=============\n");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read HTML from stdin")?;
            Ok(buf)
        }
    }
}

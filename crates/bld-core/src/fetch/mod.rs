//! Delegated media fetching.
//!
//! All protocol, codec, and network work is handed to an external
//! collaborator (yt-dlp). The core only needs two operations: list the
//! formats available for a URL, and download one of them to a named file.

mod ytdlp;

pub use ytdlp::YtDlp;

use std::path::Path;
use thiserror::Error;

/// One downloadable variant of a media URL, as reported by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    /// Collaborator-assigned format identifier.
    pub format_id: String,
    /// Vertical resolution in pixels, when known.
    pub height: Option<u32>,
    /// Direct stream URL, when reported.
    pub url: Option<String>,
}

/// Failure while talking to the external downloader.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("yt-dlp binary not found (install yt-dlp or set ytdlp.binary in config)")]
    ToolNotFound,
    #[error("could not run downloader: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("downloader exited with {status}: {stderr}")]
    Tool { status: i32, stderr: String },
    #[error("could not parse downloader output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// External download collaborator, as a seam so the pipeline can be tested
/// without network access.
pub trait MediaFetcher {
    /// Lists available formats for `url` without downloading anything.
    fn list_formats(&self, url: &str) -> Result<Vec<FormatInfo>, FetchError>;

    /// Downloads `url` to `output` using the given yt-dlp format selector
    /// (a format id, or `best`).
    fn download(&self, url: &str, selector: &str, output: &Path) -> Result<(), FetchError>;
}

//! Per-file state machine: extract link, derive name, guard, probe, download.

use crate::config::BldConfig;
use crate::extract::extract_playlist_link;
use crate::fetch::{FetchError, MediaFetcher};
use crate::naming::{output_target, NameError};
use crate::select::{choose_format, FormatChoice};
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file was skipped without touching the collaborator (or the disk).
#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No line carried a usable playlist URL.
    NoLink,
    /// Filename stem is not a plain number.
    InvalidName(NameError),
    /// Output file is already on disk; downloads are idempotent across runs.
    AlreadyExists(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoLink => write!(f, "no valid M3U8 link found"),
            SkipReason::InvalidName(err) => write!(f, "invalid name: {}", err),
            SkipReason::AlreadyExists(path) => {
                write!(f, "{} already exists", path.display())
            }
        }
    }
}

/// Result of processing one input file.
#[derive(Debug)]
pub enum FileOutcome {
    Downloaded {
        output: PathBuf,
        choice: FormatChoice,
    },
    Skipped(SkipReason),
    Failed(FetchError),
}

/// Runs the whole per-file chain. Outer `Err` only for an unreadable input
/// file; every downstream problem is folded into the outcome so the batch
/// can keep going.
pub fn process_file(
    fetcher: &dyn MediaFetcher,
    cfg: &BldConfig,
    path: &Path,
) -> Result<FileOutcome> {
    let url = match extract_playlist_link(path)? {
        Some(url) => url,
        None => return Ok(FileOutcome::Skipped(SkipReason::NoLink)),
    };

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let name = match output_target(stem, cfg.name_offset, &cfg.output_extension) {
        Ok(name) => name,
        Err(err) => return Ok(FileOutcome::Skipped(SkipReason::InvalidName(err))),
    };

    let output = path.parent().unwrap_or(Path::new(".")).join(&name);
    if output.exists() {
        return Ok(FileOutcome::Skipped(SkipReason::AlreadyExists(output)));
    }

    let formats = match fetcher.list_formats(&url) {
        Ok(formats) => formats,
        Err(err) => return Ok(FileOutcome::Failed(err)),
    };

    println!("Available formats for {}:", name);
    for format in &formats {
        let height = format
            .height
            .map(|h| format!("{}p", h))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {}  {}  {}",
            format.format_id,
            height,
            format.url.as_deref().unwrap_or("-")
        );
    }

    let choice = choose_format(&formats, cfg.target_height);
    match &choice {
        FormatChoice::Exact(id) => {
            println!("Downloading {}p format {} for {}...", cfg.target_height, id, name);
        }
        FormatChoice::Best => {
            println!(
                "{}p format not found for {}. Downloading best available format...",
                cfg.target_height, name
            );
        }
    }
    tracing::info!(url = %url, output = %output.display(), selector = choice.selector(), "downloading");

    if let Err(err) = fetcher.download(&url, choice.selector(), &output) {
        return Ok(FileOutcome::Failed(err));
    }
    Ok(FileOutcome::Downloaded { output, choice })
}

//! Batch pipeline: enumerate input files, process each to completion.
//!
//! Strictly sequential. A file that cannot be processed is reported and
//! skipped; nothing short of a directory enumeration failure aborts the
//! batch.

mod process;
mod scan;

pub use process::{process_file, FileOutcome, SkipReason};
pub use scan::scan_input_files;

use crate::config::BldConfig;
use crate::fetch::MediaFetcher;
use anyhow::Result;
use std::path::Path;

/// Per-run counters, reported after the batch finishes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Processes every `*.txt` file under `dir`, one at a time.
pub fn run_batch(
    fetcher: &dyn MediaFetcher,
    cfg: &BldConfig,
    dir: &Path,
) -> Result<BatchSummary> {
    let inputs = scan_input_files(dir)?;
    if inputs.is_empty() {
        println!("No .txt files in {}.", dir.display());
        return Ok(BatchSummary::default());
    }

    let mut summary = BatchSummary::default();
    for path in inputs {
        println!("Processing {}...", path.display());
        match process_file(fetcher, cfg, &path) {
            Ok(FileOutcome::Downloaded { output, .. }) => {
                println!("Downloaded {}.", output.display());
                summary.downloaded += 1;
            }
            Ok(FileOutcome::Skipped(reason)) => {
                println!("{}. Skipping {}.", reason, path.display());
                summary.skipped += 1;
            }
            Ok(FileOutcome::Failed(err)) => {
                println!("Error processing {}: {}", path.display(), err);
                tracing::warn!(file = %path.display(), "download failed: {}", err);
                summary.failed += 1;
            }
            Err(err) => {
                // Unreadable input file; report and move on like any other failure.
                println!("Error processing {}: {:#}", path.display(), err);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "batch done: {} downloaded, {} skipped, {} failed",
        summary.downloaded,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

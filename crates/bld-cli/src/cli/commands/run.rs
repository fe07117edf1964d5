//! `bld run [DIR]` – process a directory of input files.

use anyhow::Result;
use bld_core::config::BldConfig;
use bld_core::fetch::YtDlp;
use bld_core::pipeline;
use std::path::Path;

pub fn run_batch(cfg: &BldConfig, dir: &Path) -> Result<()> {
    let fetcher = YtDlp::from_config(&cfg.ytdlp())?;
    let summary = pipeline::run_batch(&fetcher, cfg, dir)?;
    println!(
        "Done: {} downloaded, {} skipped, {} failed.",
        summary.downloaded, summary.skipped, summary.failed
    );
    Ok(())
}

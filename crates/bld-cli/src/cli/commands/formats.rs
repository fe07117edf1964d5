//! `bld formats <URL>` – probe and print the available formats.

use anyhow::Result;
use bld_core::config::BldConfig;
use bld_core::fetch::{MediaFetcher, YtDlp};

pub fn run_formats(cfg: &BldConfig, url: &str) -> Result<()> {
    let fetcher = YtDlp::from_config(&cfg.ytdlp())?;
    let formats = fetcher.list_formats(url)?;
    if formats.is_empty() {
        println!("No formats reported for {url}.");
        return Ok(());
    }
    for format in &formats {
        let height = format
            .height
            .map(|h| format!("{}p", h))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{}  {}  {}",
            format.format_id,
            height,
            format.url.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

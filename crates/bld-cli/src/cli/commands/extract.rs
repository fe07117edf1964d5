//! `bld extract <FILE>` – show the playlist link found in one file.

use anyhow::{bail, Result};
use bld_core::extract::extract_playlist_link;
use std::path::Path;

pub fn run_extract(path: &Path) -> Result<()> {
    match extract_playlist_link(path)? {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => bail!("no valid M3U8 link found in {}", path.display()),
    }
}

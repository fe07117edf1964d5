//! Playlist link extraction from input text files.
//!
//! A line qualifies when it mentions `.m3u8` and its last
//! whitespace-delimited token is an http(s) URL. The first qualifying
//! line wins; later ones are never considered.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Substring that marks a line as carrying a playlist link.
const PLAYLIST_MARKER: &str = ".m3u8";

/// Scans `lines` in order and returns the first playlist URL found.
///
/// The URL is the final whitespace token of a marker line and must start
/// with `http`. A marker line whose last token is not a URL (e.g. trailing
/// commentary after the link) is skipped and scanning continues.
pub fn scan_lines<'a, I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        let line = line.trim();
        if !line.contains(PLAYLIST_MARKER) {
            continue;
        }
        if let Some(token) = line.split_whitespace().last() {
            if token.starts_with("http") {
                return Some(token.to_string());
            }
        }
    }
    None
}

/// Reads `path` and extracts its playlist link, if any.
pub fn extract_playlist_link(path: &Path) -> Result<Option<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    Ok(scan_lines(data.lines()))
}

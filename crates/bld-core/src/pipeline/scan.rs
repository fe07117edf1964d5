//! Input enumeration: `*.txt` files in the batch directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Lists the `.txt` files directly under `dir`, sorted for a stable
/// processing order across runs.
pub fn scan_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing input directory {}", dir.display()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

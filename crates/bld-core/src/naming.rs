//! Output filename derivation: numeric input stem plus a fixed offset.

use thiserror::Error;

/// Input stems must be plain integers; anything else is skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("filename stem {0:?} is not a number")]
    NotNumeric(String),
}

/// Derives the output filename for an input stem.
///
/// `"10"` with offset 175 and extension `"MP4"` yields `"185.MP4"`.
pub fn output_target(stem: &str, offset: i64, extension: &str) -> Result<String, NameError> {
    let id: i64 = stem
        .parse()
        .map_err(|_| NameError::NotNumeric(stem.to_string()))?;
    Ok(format!("{}.{}", id + offset, extension))
}

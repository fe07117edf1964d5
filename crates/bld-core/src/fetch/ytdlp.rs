//! yt-dlp subprocess backend for [`MediaFetcher`].

use super::{FetchError, FormatInfo, MediaFetcher};
use crate::config::YtdlpConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Shape of `yt-dlp --dump-json` output; only the formats array matters here.
#[derive(Debug, Deserialize)]
struct ProbeInfo {
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    format_id: String,
    height: Option<u32>,
    url: Option<String>,
}

/// [`MediaFetcher`] backed by the yt-dlp binary.
pub struct YtDlp {
    binary: PathBuf,
    socket_timeout_secs: u32,
}

impl YtDlp {
    /// Resolves the yt-dlp binary from the config override or `$PATH`.
    pub fn from_config(cfg: &YtdlpConfig) -> Result<Self, FetchError> {
        let binary = match &cfg.binary {
            Some(path) => path.clone(),
            None => which::which("yt-dlp").map_err(|_| FetchError::ToolNotFound)?,
        };
        tracing::debug!("using yt-dlp at {}", binary.display());
        Ok(Self {
            binary,
            socket_timeout_secs: cfg.socket_timeout_secs,
        })
    }

    fn run(&self, args: &[&str]) -> Result<Output, FetchError> {
        tracing::debug!("yt-dlp {}", args.join(" "));
        let output = Command::new(&self.binary).args(args).output()?;
        if !output.status.success() {
            return Err(FetchError::Tool {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }

    fn timeout_arg(&self) -> String {
        self.socket_timeout_secs.to_string()
    }
}

impl MediaFetcher for YtDlp {
    fn list_formats(&self, url: &str) -> Result<Vec<FormatInfo>, FetchError> {
        let timeout = self.timeout_arg();
        let output = self.run(&[
            "--dump-json",
            "--no-playlist",
            "--no-warnings",
            "--socket-timeout",
            &timeout,
            url,
        ])?;
        let info: ProbeInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info
            .formats
            .into_iter()
            .map(|f| FormatInfo {
                format_id: f.format_id,
                height: f.height,
                url: f.url,
            })
            .collect())
    }

    fn download(&self, url: &str, selector: &str, output: &Path) -> Result<(), FetchError> {
        let timeout = self.timeout_arg();
        let out = output.to_string_lossy();
        self.run(&[
            "-f",
            selector,
            "--no-playlist",
            "--no-warnings",
            "--socket-timeout",
            &timeout,
            "-o",
            &out,
            url,
        ])?;
        Ok(())
    }
}

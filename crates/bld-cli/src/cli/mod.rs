//! CLI for the BLD batch playlist-link downloader.

mod commands;

use anyhow::Result;
use bld_core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_batch, run_extract, run_formats};

/// Top-level CLI for the BLD batch downloader.
#[derive(Debug, Parser)]
#[command(name = "bld")]
#[command(about = "BLD: batch playlist-link downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Process every .txt file in a directory and download its playlist.
    Run {
        /// Directory holding the .txt input files (default: current directory).
        dir: Option<PathBuf>,
        /// Preferred stream height in pixels (overrides config).
        #[arg(long, value_name = "PIXELS")]
        target_height: Option<u32>,
        /// Offset added to the numeric input stem (overrides config).
        #[arg(long, value_name = "N")]
        offset: Option<i64>,
    },

    /// Print the playlist link embedded in one text file.
    Extract {
        /// Path to the text file.
        path: PathBuf,
    },

    /// List the formats the downloader reports for a URL.
    Formats {
        /// Playlist or media page URL.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                dir,
                target_height,
                offset,
            } => {
                if let Some(height) = target_height {
                    cfg.target_height = height;
                }
                if let Some(offset) = offset {
                    cfg.name_offset = offset;
                }
                let dir = match dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_batch(&cfg, &dir)?;
            }
            CliCommand::Extract { path } => run_extract(&path)?,
            CliCommand::Formats { url } => run_formats(&cfg, &url)?,
        }

        Ok(())
    }
}

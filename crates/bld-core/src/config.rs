use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// yt-dlp invocation parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtdlpConfig {
    /// Explicit path to the yt-dlp binary. When missing, `$PATH` is searched.
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Socket timeout in seconds passed to yt-dlp (`--socket-timeout`).
    #[serde(default = "default_socket_timeout_secs")]
    pub socket_timeout_secs: u32,
}

fn default_socket_timeout_secs() -> u32 {
    15
}

impl Default for YtdlpConfig {
    fn default() -> Self {
        Self {
            binary: None,
            socket_timeout_secs: default_socket_timeout_secs(),
        }
    }
}

/// Global configuration loaded from `~/.config/bld/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BldConfig {
    /// Preferred stream height in pixels; first matching format wins.
    pub target_height: u32,
    /// Offset added to the numeric input stem to produce the output stem.
    pub name_offset: i64,
    /// Extension (without the dot) of produced video files.
    pub output_extension: String,
    /// Optional yt-dlp settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub ytdlp: Option<YtdlpConfig>,
}

impl Default for BldConfig {
    fn default() -> Self {
        Self {
            target_height: 720,
            name_offset: 175,
            output_extension: "MP4".to_string(),
            ytdlp: None,
        }
    }
}

impl BldConfig {
    /// yt-dlp settings with defaults filled in.
    pub fn ytdlp(&self) -> YtdlpConfig {
        self.ytdlp.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bld")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BldConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BldConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BldConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = BldConfig::default();
        assert_eq!(cfg.target_height, 720);
        assert_eq!(cfg.name_offset, 175);
        assert_eq!(cfg.output_extension, "MP4");
        assert!(cfg.ytdlp.is_none());
        assert_eq!(cfg.ytdlp().socket_timeout_secs, 15);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = BldConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: BldConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.target_height, cfg.target_height);
        assert_eq!(parsed.name_offset, cfg.name_offset);
        assert_eq!(parsed.output_extension, cfg.output_extension);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            target_height = 1080
            name_offset = 0
            output_extension = "mp4"
        "#;
        let cfg: BldConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.target_height, 1080);
        assert_eq!(cfg.name_offset, 0);
        assert_eq!(cfg.output_extension, "mp4");
        assert!(cfg.ytdlp.is_none());
    }

    #[test]
    fn config_toml_ytdlp_section() {
        let toml = r#"
            target_height = 720
            name_offset = 175
            output_extension = "MP4"

            [ytdlp]
            binary = "/opt/yt-dlp/yt-dlp"
            socket_timeout_secs = 30
        "#;
        let cfg: BldConfig = toml::from_str(toml).unwrap();
        let ytdlp = cfg.ytdlp();
        assert_eq!(ytdlp.binary.as_deref(), Some(std::path::Path::new("/opt/yt-dlp/yt-dlp")));
        assert_eq!(ytdlp.socket_timeout_secs, 30);
    }

    #[test]
    fn config_toml_ytdlp_binary_only() {
        // A [ytdlp] table that sets just the binary must still parse; the
        // timeout falls back to its default.
        let toml = r#"
            target_height = 720
            name_offset = 175
            output_extension = "MP4"

            [ytdlp]
            binary = "/usr/local/bin/yt-dlp"
        "#;
        let cfg: BldConfig = toml::from_str(toml).unwrap();
        let ytdlp = cfg.ytdlp();
        assert_eq!(
            ytdlp.binary.as_deref(),
            Some(std::path::Path::new("/usr/local/bin/yt-dlp"))
        );
        assert_eq!(ytdlp.socket_timeout_secs, 15);
    }

    #[test]
    fn config_toml_ytdlp_empty_table() {
        let toml = r#"
            target_height = 720
            name_offset = 175
            output_extension = "MP4"

            [ytdlp]
        "#;
        let cfg: BldConfig = toml::from_str(toml).unwrap();
        let ytdlp = cfg.ytdlp();
        assert!(ytdlp.binary.is_none());
        assert_eq!(ytdlp.socket_timeout_secs, 15);
    }
}

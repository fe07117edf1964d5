//! Format selection: preferred height first, best quality as fallback.

use crate::fetch::FormatInfo;

/// Outcome of matching the format list against the preferred height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatChoice {
    /// A format with the preferred height exists; download it by id.
    Exact(String),
    /// No format matched; let the collaborator pick its best quality.
    Best,
}

impl FormatChoice {
    /// yt-dlp format selector string for this choice.
    pub fn selector(&self) -> &str {
        match self {
            FormatChoice::Exact(id) => id,
            FormatChoice::Best => "best",
        }
    }
}

/// Picks the first format whose height equals `target_height`, else `Best`.
pub fn choose_format(formats: &[FormatInfo], target_height: u32) -> FormatChoice {
    formats
        .iter()
        .find(|f| f.height == Some(target_height))
        .map(|f| FormatChoice::Exact(f.format_id.clone()))
        .unwrap_or(FormatChoice::Best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(id: &str, height: Option<u32>) -> FormatInfo {
        FormatInfo {
            format_id: id.to_string(),
            height,
            url: None,
        }
    }

    #[test]
    fn picks_target_height() {
        let formats = [fmt("240p", Some(240)), fmt("720p", Some(720)), fmt("1080p", Some(1080))];
        assert_eq!(
            choose_format(&formats, 720),
            FormatChoice::Exact("720p".to_string())
        );
    }

    #[test]
    fn first_matching_format_wins() {
        let formats = [fmt("hls-720-a", Some(720)), fmt("hls-720-b", Some(720))];
        assert_eq!(
            choose_format(&formats, 720),
            FormatChoice::Exact("hls-720-a".to_string())
        );
    }

    #[test]
    fn falls_back_to_best() {
        let formats = [fmt("240p", Some(240)), fmt("audio", None)];
        let choice = choose_format(&formats, 720);
        assert_eq!(choice, FormatChoice::Best);
        assert_eq!(choice.selector(), "best");
    }

    #[test]
    fn empty_list_falls_back_to_best() {
        assert_eq!(choose_format(&[], 720), FormatChoice::Best);
    }

    #[test]
    fn unknown_height_never_matches() {
        let formats = [fmt("audio", None)];
        assert_eq!(choose_format(&formats, 720), FormatChoice::Best);
    }
}

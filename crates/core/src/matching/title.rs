//! Title normalization and release-name parsing.
//!
//! Normalization is the single identity key for movie matching: every
//! comparison between a tracked movie name and an incoming title goes
//! through [`normalize_title`] on both sides. It is never used for display.
//!
//! The release-name parser extracts a plain movie title from a raw torrent
//! name like `Rambo.2023.1080p.BluRay.x264-GROUP`. It is heuristic by
//! nature; failure to parse is an expected outcome, not an error.

use std::sync::OnceLock;

use regex_lite::Regex;

use super::resolution::Resolution;

/// Canonicalize a title for equality comparison.
///
/// Deterministic and idempotent: `normalize_title(normalize_title(x)) ==
/// normalize_title(x)` for all inputs.
pub fn normalize_title(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Structured information extracted from a raw release name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelease {
    /// The movie title portion, with separators folded to spaces.
    pub title: String,
    /// Release year, when present.
    pub year: Option<u32>,
    /// Resolution tag, when present.
    pub resolution: Option<Resolution>,
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        // First token that is clearly not part of the title: a year, a
        // resolution, a source tag or a codec tag.
        Regex::new(
            r"(?i)\b(19[0-9]{2}|20[0-9]{2}|2160p|1080p|1080i|720p|480p|bluray|blu-ray|bdrip|brrip|remux|web-dl|webdl|webrip|hdtv|dvdrip|x264|x265|h264|h265|hevc|xvid|av1)\b",
        )
        .expect("marker regex is valid")
    })
}

fn year_regex() -> &'static Regex {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    YEAR.get_or_init(|| Regex::new(r"\b(19[0-9]{2}|20[0-9]{2})\b").expect("year regex is valid"))
}

fn resolution_regex() -> &'static Regex {
    static RESOLUTION: OnceLock<Regex> = OnceLock::new();
    RESOLUTION.get_or_init(|| {
        Regex::new(r"(?i)\b(2160p|1080p|720p)\b").expect("resolution regex is valid")
    })
}

/// Parse a raw torrent display name into a structured release.
///
/// Returns `None` when no title can be extracted (for example a name that
/// starts with a year or consists only of tags).
pub fn parse_release_title(raw: &str) -> Option<ParsedRelease> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '.' || c == '_' { ' ' } else { c })
        .collect();

    let title_end = marker_regex()
        .find(&cleaned)
        .map(|m| m.start())
        .unwrap_or(cleaned.len());

    let title = cleaned[..title_end]
        .trim()
        .trim_end_matches(['-', '(', '['])
        .trim()
        .to_string();

    if title.is_empty() {
        return None;
    }

    let rest = &cleaned[title_end..];
    let year = year_regex()
        .find(rest)
        .and_then(|m| m.as_str().parse::<u32>().ok());
    let resolution = resolution_regex()
        .find(rest)
        .map(|m| Resolution::from_label(m.as_str()));

    Some(ParsedRelease {
        title,
        year,
        resolution,
    })
}

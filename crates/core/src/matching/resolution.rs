//! Resolution labels and their quality ranking.
//!
//! Feed items advertise a resolution label ("2160p", "1080p", ...) and the
//! runtime settings carry a minimum. Ranking is a total order over scores so
//! the threshold check is simply `score(item) >= score(minimum)`.

use serde::{Deserialize, Serialize};

/// Resolution labels accepted when configuring the minimum resolution.
pub const VALID_RESOLUTIONS: [&str; 3] = ["2160p", "1080p", "720p"];

/// A release resolution label with a total quality order.
///
/// Unknown labels map to `Other`, which ranks below every known label but is
/// still comparable. Parsing never fails; an unrecognized feed item must not
/// crash matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Resolution {
    Uhd2160,
    FullHd1080,
    #[default]
    Hd720,
    Other,
}

impl Resolution {
    /// Parse a label case-insensitively. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "2160p" | "4k" | "uhd" => Resolution::Uhd2160,
            "1080p" => Resolution::FullHd1080,
            "720p" => Resolution::Hd720,
            _ => Resolution::Other,
        }
    }

    /// Quality score. Higher score = higher quality.
    pub fn score(self) -> u32 {
        match self {
            Resolution::Uhd2160 => 10_000,
            Resolution::FullHd1080 => 1_000,
            Resolution::Hd720 => 100,
            Resolution::Other => 10,
        }
    }

    /// Canonical label for serialization and API responses.
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Uhd2160 => "2160p",
            Resolution::FullHd1080 => "1080p",
            Resolution::Hd720 => "720p",
            Resolution::Other => "other",
        }
    }

    /// Threshold check used by the feed matcher.
    pub fn meets(self, minimum: Resolution) -> bool {
        self.score() >= minimum.score()
    }
}

impl From<String> for Resolution {
    fn from(label: String) -> Self {
        Resolution::from_label(&label)
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.label().to_string()
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(Resolution::from_label("2160p"), Resolution::Uhd2160);
        assert_eq!(Resolution::from_label("1080p"), Resolution::FullHd1080);
        assert_eq!(Resolution::from_label("720p"), Resolution::Hd720);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(Resolution::from_label("1080P"), Resolution::FullHd1080);
        assert_eq!(Resolution::from_label(" 720P "), Resolution::Hd720);
    }

    #[test]
    fn test_unknown_label_ranks_below_known() {
        let unknown = Resolution::from_label("480i");
        assert_eq!(unknown, Resolution::Other);
        assert!(unknown.score() < Resolution::Hd720.score());
    }

    #[test]
    fn test_scores_are_a_total_order() {
        let mut scores: Vec<u32> = [
            Resolution::Uhd2160,
            Resolution::FullHd1080,
            Resolution::Hd720,
            Resolution::Other,
        ]
        .iter()
        .map(|r| r.score())
        .collect();
        scores.dedup();
        assert_eq!(scores.len(), 4);
        assert!(scores.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_meets_is_monotone() {
        // Anything that passes at quality B also passes at any quality A > B.
        assert!(Resolution::Uhd2160.meets(Resolution::Hd720));
        assert!(Resolution::Hd720.meets(Resolution::Hd720));
        assert!(!Resolution::Hd720.meets(Resolution::FullHd1080));
        assert!(!Resolution::Other.meets(Resolution::Hd720));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Resolution::FullHd1080).unwrap();
        assert_eq!(json, "\"1080p\"");
        let parsed: Resolution = serde_json::from_str("\"2160p\"").unwrap();
        assert_eq!(parsed, Resolution::Uhd2160);
        // Unknown labels deserialize to Other instead of failing.
        let parsed: Resolution = serde_json::from_str("\"potato\"").unwrap();
        assert_eq!(parsed, Resolution::Other);
    }
}

//! Orientation classification of a video's frame geometry.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Orientation category derived from a probed stream's dimensions.
///
/// Used as the leading path segment of the storage key, so landscape,
/// portrait, and other uploads land under separate prefixes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Other,
}

impl Orientation {
    /// Classify a stream's dimensions.
    ///
    /// The comparison uses integer truncation: near-16:9 sizes whose height
    /// (or width) does not divide exactly fall into `Other`. 1920x1080
    /// matches because 16*1080/9 == 1920 exactly.
    pub fn classify(width: i64, height: i64) -> Self {
        if width == 16 * height / 9 {
            Orientation::Landscape
        } else if height == 16 * width / 9 {
            Orientation::Portrait
        } else {
            Orientation::Other
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_common_resolutions() {
        assert_eq!(Orientation::classify(1920, 1080), Orientation::Landscape);
        assert_eq!(Orientation::classify(1280, 720), Orientation::Landscape);
        assert_eq!(Orientation::classify(1080, 1920), Orientation::Portrait);
        assert_eq!(Orientation::classify(720, 1280), Orientation::Portrait);
        assert_eq!(Orientation::classify(1000, 1000), Orientation::Other);
        assert_eq!(Orientation::classify(640, 480), Orientation::Other);
    }

    #[test]
    fn test_classify_truncation_boundary() {
        // 854x480 is commonly labelled 16:9 but 16*480/9 truncates to 853,
        // so it classifies as Other.
        assert_eq!(Orientation::classify(854, 480), Orientation::Other);
        assert_eq!(Orientation::classify(853, 480), Orientation::Landscape);
        assert_eq!(Orientation::classify(480, 854), Orientation::Other);
        assert_eq!(Orientation::classify(480, 853), Orientation::Portrait);
    }

    #[test]
    fn test_classify_zero_dimensions() {
        // A probe that finds no video stream reports (0, 0); 0 == 16*0/9
        // so the landscape arm wins.
        assert_eq!(Orientation::classify(0, 0), Orientation::Landscape);
    }

    #[test]
    fn test_display_matches_key_prefixes() {
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
        assert_eq!(Orientation::Other.to_string(), "other");
    }
}

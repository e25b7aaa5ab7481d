//! Result types produced by the analyzer.

use serde::Serialize;

/// Qualitative strength verdict derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "weak")]
    Weak,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "very-strong")]
    VeryStrong,
}

impl Verdict {
    /// Maps a final 0-100 score into its verdict bucket.
    ///
    /// Bands are upper-exclusive: `<35` weak, `<65` fair, `<85` strong,
    /// everything else very-strong. The empty verdict is never produced
    /// here; it is reserved for zero-length input.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..35 => Verdict::Weak,
            35..65 => Verdict::Fair,
            65..85 => Verdict::Strong,
            _ => Verdict::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Empty => "empty",
            Verdict::Weak => "weak",
            Verdict::Fair => "fair",
            Verdict::Strong => "strong",
            Verdict::VeryStrong => "very-strong",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full risk assessment for one password.
///
/// Produced fresh per call; `warnings` and `suggestions` are insertion-order
/// unique, `crack_times` follows the guess-rate table declaration order and
/// serializes as `[label, duration]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub length: usize,
    pub charset_size: u32,
    pub entropy_bits: f64,
    pub score: u8,
    pub verdict: Verdict,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub crack_times: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_buckets() {
        assert_eq!(Verdict::from_score(0), Verdict::Weak);
        assert_eq!(Verdict::from_score(34), Verdict::Weak);
        assert_eq!(Verdict::from_score(35), Verdict::Fair);
        assert_eq!(Verdict::from_score(64), Verdict::Fair);
        assert_eq!(Verdict::from_score(65), Verdict::Strong);
        assert_eq!(Verdict::from_score(84), Verdict::Strong);
        assert_eq!(Verdict::from_score(85), Verdict::VeryStrong);
        assert_eq!(Verdict::from_score(100), Verdict::VeryStrong);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Empty.as_str(), "empty");
        assert_eq!(Verdict::VeryStrong.as_str(), "very-strong");
        assert_eq!(Verdict::Weak.to_string(), "weak");
    }
}

use serde::Serialize;
use std::fmt;

pub type Score = u32;

/// Maximum points any single category contributes.
pub const CATEGORY_MAX: Score = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub readability: Score,
    pub headings: Score,
    pub keywords: Score,
    pub completeness: Score,
}

impl ScoreBreakdown {
    pub fn new(readability: Score, headings: Score, keywords: Score, completeness: Score) -> Self {
        Self {
            readability: readability.min(CATEGORY_MAX),
            headings: headings.min(CATEGORY_MAX),
            keywords: keywords.min(CATEGORY_MAX),
            completeness: completeness.min(CATEGORY_MAX),
        }
    }

    pub fn total(&self) -> Score {
        self.readability + self.headings + self.keywords + self.completeness
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: Score) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::NeedsWork
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Excellent => "Your content is very well optimized for SEO.",
            Self::Good => {
                "Your content is generally well optimized with some room for improvement."
            }
            Self::Moderate => "Your content needs several improvements to be fully optimized.",
            Self::NeedsWork => {
                "Your content requires significant optimization to perform well in search."
            }
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::NeedsWork => "Needs Work",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_are_inclusive_at_lower_bound() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsWork);
    }

    #[test]
    fn breakdown_caps_each_category() {
        let breakdown = ScoreBreakdown::new(30, 25, 40, 10);
        assert_eq!(breakdown.readability, 25);
        assert_eq!(breakdown.keywords, 25);
        assert_eq!(breakdown.total(), 85);
    }

    #[test]
    fn needs_work_band_displays_with_space() {
        assert_eq!(ScoreBand::NeedsWork.to_string(), "Needs Work");
    }
}

use crate::types::scoring::{Score, ScoreBand, ScoreBreakdown};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityLabel {
    Good,
    Moderate,
    Difficult,
    Invalid,
}

impl fmt::Display for ReadabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
            Self::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeywordLabel {
    Missing,
    Underused,
    Optimal,
    Overused,
    Present,
}

impl fmt::Display for KeywordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Missing => "Missing",
            Self::Underused => "Underused",
            Self::Optimal => "Optimal",
            Self::Overused => "Overused (potential keyword stuffing)",
            Self::Present => "Present",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityAssessment {
    pub label: ReadabilityLabel,
    pub avg_words_per_sentence: f64,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub assessment: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingAssessment {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub assessment: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAssessment {
    pub keyword: String,
    pub occurrence_count: usize,
    pub density_percent: f64,
    pub appears_in_headings: bool,
    pub appears_in_intro: bool,
    pub label: KeywordLabel,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    pub keywords: Vec<KeywordAssessment>,
    pub overall_summary: String,
}

impl KeywordReport {
    pub fn optimal_count(&self) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| keyword.label == KeywordLabel::Optimal)
            .count()
    }

    pub fn recommendations(&self) -> impl Iterator<Item = &String> {
        self.keywords
            .iter()
            .flat_map(|keyword| keyword.recommendations.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessAssessment {
    pub word_count: usize,
    pub has_intro: bool,
    pub has_conclusion: bool,
    pub has_bullet_points: bool,
    pub has_call_to_action: bool,
    pub assessment: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentScoreReport {
    pub total_score: Score,
    pub band: ScoreBand,
    pub breakdown: ScoreBreakdown,
    pub min_word_count: usize,
    pub readability: ReadabilityAssessment,
    pub headings: HeadingAssessment,
    pub keywords: KeywordReport,
    pub completeness: CompletenessAssessment,
    pub recommendations: Vec<String>,
}

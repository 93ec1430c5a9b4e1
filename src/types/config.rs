use crate::error::ScorerError;
use crate::report::OutputFormat;
use crate::types::request::DEFAULT_MIN_WORD_COUNT;
use serde::Deserialize;

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub min_word_count: Option<usize>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub max_recommendations: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub difficult_sentence_words: Option<f64>,
    pub moderate_sentence_words: Option<f64>,
    pub long_paragraph_words: Option<usize>,
    pub long_paragraph_ratio: Option<f64>,
    pub section_min_words: Option<usize>,
    pub intro_window_words: Option<usize>,
    pub optimal_density_min: Option<f64>,
    pub optimal_density_max: Option<f64>,
    pub overused_density: Option<f64>,
    pub list_suggestion_words: Option<usize>,
}

/// Heuristic constants used by the sub-assessments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub difficult_sentence_words: f64,
    pub moderate_sentence_words: f64,
    pub long_paragraph_words: usize,
    pub long_paragraph_ratio: f64,
    pub section_min_words: usize,
    pub intro_window_words: usize,
    pub optimal_density_min: f64,
    pub optimal_density_max: f64,
    pub overused_density: f64,
    pub list_suggestion_words: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            difficult_sentence_words: 25.0,
            moderate_sentence_words: 20.0,
            long_paragraph_words: 100,
            long_paragraph_ratio: 0.3,
            section_min_words: 30,
            intro_window_words: 100,
            optimal_density_min: 0.5,
            optimal_density_max: 2.5,
            overused_density: 3.0,
            list_suggestion_words: 500,
        }
    }
}

/// Effective settings after applying config overrides to built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub min_word_count: usize,
    pub keywords: Vec<String>,
    pub max_recommendations: usize,
    pub format: Option<OutputFormat>,
    pub thresholds: Thresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            keywords: Vec::new(),
            max_recommendations: DEFAULT_MAX_RECOMMENDATIONS,
            format: None,
            thresholds: Thresholds::default(),
        }
    }
}

impl ScorerConfig {
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.thresholds {
            Some(t) => Thresholds {
                difficult_sentence_words: t
                    .difficult_sentence_words
                    .unwrap_or(defaults.difficult_sentence_words),
                moderate_sentence_words: t
                    .moderate_sentence_words
                    .unwrap_or(defaults.moderate_sentence_words),
                long_paragraph_words: t
                    .long_paragraph_words
                    .unwrap_or(defaults.long_paragraph_words),
                long_paragraph_ratio: t
                    .long_paragraph_ratio
                    .unwrap_or(defaults.long_paragraph_ratio),
                section_min_words: t.section_min_words.unwrap_or(defaults.section_min_words),
                intro_window_words: t.intro_window_words.unwrap_or(defaults.intro_window_words),
                optimal_density_min: t
                    .optimal_density_min
                    .unwrap_or(defaults.optimal_density_min),
                optimal_density_max: t
                    .optimal_density_max
                    .unwrap_or(defaults.optimal_density_max),
                overused_density: t.overused_density.unwrap_or(defaults.overused_density),
                list_suggestion_words: t
                    .list_suggestion_words
                    .unwrap_or(defaults.list_suggestion_words),
            },
            None => defaults,
        }
    }

    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let scoring = self.scoring.as_ref();
        let report = self.report.as_ref();
        Settings {
            min_word_count: scoring
                .and_then(|scoring| scoring.min_word_count)
                .unwrap_or(defaults.min_word_count),
            keywords: scoring
                .map(|scoring| scoring.keywords.clone())
                .unwrap_or_default(),
            max_recommendations: report
                .and_then(|report| report.max_recommendations)
                .unwrap_or(defaults.max_recommendations),
            format: report.and_then(|report| report.format),
            thresholds: self.thresholds(),
        }
    }

    pub fn validate(&self) -> Result<(), ScorerError> {
        if let Some(scoring) = &self.scoring {
            if scoring.min_word_count == Some(0) {
                return Err(ScorerError::ConfigParse(
                    "scoring.min_word_count must be greater than 0".to_string(),
                ));
            }
            if scoring.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(ScorerError::ConfigParse(
                    "scoring.keywords entries must be non-empty".to_string(),
                ));
            }
        }

        if let Some(report) = &self.report {
            if report.max_recommendations == Some(0) {
                return Err(ScorerError::ConfigParse(
                    "report.max_recommendations must be greater than 0".to_string(),
                ));
            }
        }

        let t = self.thresholds();
        for (name, value) in [
            ("difficult_sentence_words", t.difficult_sentence_words),
            ("moderate_sentence_words", t.moderate_sentence_words),
            ("long_paragraph_ratio", t.long_paragraph_ratio),
            ("optimal_density_min", t.optimal_density_min),
            ("optimal_density_max", t.optimal_density_max),
            ("overused_density", t.overused_density),
        ] {
            if !value.is_finite() {
                return Err(ScorerError::ConfigParse(format!(
                    "thresholds.{name} must be a finite number"
                )));
            }
        }
        if t.moderate_sentence_words <= 0.0 {
            return Err(ScorerError::ConfigParse(
                "thresholds.moderate_sentence_words must be greater than 0".to_string(),
            ));
        }
        if t.moderate_sentence_words >= t.difficult_sentence_words {
            return Err(ScorerError::ConfigParse(format!(
                "thresholds.moderate_sentence_words ({}) must be below thresholds.difficult_sentence_words ({})",
                t.moderate_sentence_words, t.difficult_sentence_words
            )));
        }
        if !(0.0..=1.0).contains(&t.long_paragraph_ratio) {
            return Err(ScorerError::ConfigParse(
                "thresholds.long_paragraph_ratio must be between 0.0 and 1.0".to_string(),
            ));
        }
        for (name, value) in [
            ("long_paragraph_words", t.long_paragraph_words),
            ("section_min_words", t.section_min_words),
            ("intro_window_words", t.intro_window_words),
        ] {
            if value == 0 {
                return Err(ScorerError::ConfigParse(format!(
                    "thresholds.{name} must be greater than 0"
                )));
            }
        }
        if t.optimal_density_min < 0.0 || t.optimal_density_min > t.optimal_density_max {
            return Err(ScorerError::ConfigParse(
                "thresholds.optimal_density_min must be between 0.0 and thresholds.optimal_density_max"
                    .to_string(),
            ));
        }
        if t.optimal_density_max > t.overused_density {
            return Err(ScorerError::ConfigParse(
                "thresholds.optimal_density_max cannot exceed thresholds.overused_density"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

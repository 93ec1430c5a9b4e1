use crate::error::{Result, ScorerError};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

pub const DEFAULT_MIN_WORD_COUNT: usize = 300;

/// A single scoring request, as received from the CLI or over the tool boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_keywords: Vec<String>,
    #[serde(
        default = "default_min_word_count",
        deserialize_with = "null_as_default_min_word_count"
    )]
    pub min_word_count: usize,
}

fn default_min_word_count() -> usize {
    DEFAULT_MIN_WORD_COUNT
}

/// An explicit `null` reads the same as an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_min_word_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or(DEFAULT_MIN_WORD_COUNT))
}

/// Checks the parts of a request that do not depend on the content.
pub fn validate_scoring_options(target_keywords: &[String], min_word_count: usize) -> Result<()> {
    if target_keywords.is_empty() {
        return Err(ScorerError::InvalidInput(
            "No target keywords provided for analysis.".to_string(),
        ));
    }
    if let Some(position) = target_keywords
        .iter()
        .position(|keyword| keyword.trim().is_empty())
    {
        return Err(ScorerError::InvalidInput(format!(
            "Target keyword at position {} is empty.",
            position + 1
        )));
    }
    if min_word_count == 0 {
        return Err(ScorerError::InvalidInput(
            "min_word_count must be greater than 0.".to_string(),
        ));
    }
    Ok(())
}

impl AnalysisRequest {
    pub fn new(
        content: impl Into<String>,
        target_keywords: Vec<String>,
        min_word_count: usize,
    ) -> Self {
        Self {
            content: content.into(),
            target_keywords,
            min_word_count,
        }
    }

    /// Rejects requests the scorer cannot meaningfully answer.
    ///
    /// Whitespace-only content passes: it degrades to an `Invalid`
    /// readability label instead of an input error.
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(ScorerError::InvalidInput(
                "No content provided for analysis.".to_string(),
            ));
        }
        validate_scoring_options(&self.target_keywords, self.min_word_count)
    }

    /// Keywords in input order with exact duplicates removed.
    pub fn unique_keywords(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.target_keywords
            .iter()
            .map(String::as_str)
            .filter(|keyword| seen.insert(*keyword))
            .collect()
    }
}

pub mod json;
pub mod md;
pub mod writer;

use crate::error::ScorerError;
use crate::types::report::ContentScoreReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
        }
    }
}

pub fn render(
    report: &ContentScoreReport,
    format: OutputFormat,
    max_recommendations: usize,
) -> Result<String, ScorerError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorerError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, max_recommendations)),
    }
}

//! JSON-in, Markdown-out boundary for agent runtimes that call the scorer as a tool.

use crate::analyze::analyze;
use crate::error::{Result, ScorerError};
use crate::report::md::to_markdown;
use crate::types::config::Settings;
use crate::types::request::AnalysisRequest;

pub fn parse_request(input: &str, settings: &Settings) -> Result<AnalysisRequest> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ScorerError::InvalidJson(e.to_string()))?;
    let explicit_min = value
        .get("min_word_count")
        .is_some_and(|min_word_count| !min_word_count.is_null());
    let mut request: AnalysisRequest =
        serde_json::from_value(value).map_err(|e| ScorerError::InvalidJson(e.to_string()))?;
    if !explicit_min {
        request.min_word_count = settings.min_word_count;
    }
    Ok(request)
}

pub fn respond(input: &str, settings: &Settings) -> Result<String> {
    let request = parse_request(input, settings)?;
    let report = analyze(&request, &settings.thresholds)?;
    Ok(to_markdown(&report, settings.max_recommendations))
}

/// Never fails: errors come back as an `Error: ...` string for the caller to relay.
pub fn run(input: &str, settings: &Settings) -> String {
    match respond(input, settings) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::warn!(error = %e, "content analysis request rejected");
            format!("Error: {e}")
        }
    }
}

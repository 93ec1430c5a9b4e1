pub mod completeness;
pub mod headings;
pub mod keywords;
pub mod readability;
pub mod text;

use crate::error::Result;
use crate::types::config::Thresholds;
use crate::types::report::{
    CompletenessAssessment, ContentScoreReport, HeadingAssessment, KeywordReport,
    ReadabilityAssessment, ReadabilityLabel,
};
use crate::types::request::AnalysisRequest;
use crate::types::scoring::{Score, ScoreBand, ScoreBreakdown, CATEGORY_MAX};
use std::collections::HashSet;

/// Scores one request. Pure: identical input always yields an identical report.
pub fn analyze(request: &AnalysisRequest, thresholds: &Thresholds) -> Result<ContentScoreReport> {
    request.validate()?;
    let content = request.content.as_str();
    let keywords = request.unique_keywords();

    let readability = readability::assess_readability(content, thresholds);
    let headings = headings::assess_headings(content);
    let keyword_report = keywords::assess_keywords(content, &keywords, thresholds)?;
    let completeness =
        completeness::assess_completeness(content, request.min_word_count, thresholds);

    let breakdown = ScoreBreakdown::new(
        readability_score(&readability),
        heading_score(&headings),
        keyword_score(&keyword_report),
        completeness_score(&completeness, request.min_word_count),
    );
    let total_score = breakdown.total();

    let recommendations = dedupe(
        readability
            .recommendations
            .iter()
            .chain(headings.recommendations.iter())
            .chain(keyword_report.recommendations())
            .chain(completeness.recommendations.iter()),
    );

    tracing::debug!(
        total_score,
        readability = breakdown.readability,
        headings = breakdown.headings,
        keywords = breakdown.keywords,
        completeness = breakdown.completeness,
        recommendations = recommendations.len(),
        "content scored"
    );

    Ok(ContentScoreReport {
        total_score,
        band: ScoreBand::from_score(total_score),
        breakdown,
        min_word_count: request.min_word_count,
        readability,
        headings,
        keywords: keyword_report,
        completeness,
        recommendations,
    })
}

fn readability_score(readability: &ReadabilityAssessment) -> Score {
    match readability.label {
        ReadabilityLabel::Good => 25,
        ReadabilityLabel::Moderate => 15,
        ReadabilityLabel::Difficult | ReadabilityLabel::Invalid => 5,
    }
}

fn heading_score(headings: &HeadingAssessment) -> Score {
    let mut score = 0;
    if headings.h1_count == 1 {
        score += 10;
    }
    if headings.h2_count > 0 {
        score += 10;
    }
    if headings.h3_count > 0 {
        score += 5;
    }
    score
}

fn keyword_score(report: &KeywordReport) -> Score {
    let total = report.keywords.len();
    if total == 0 {
        return 0;
    }
    // Truncates toward zero, so 1 of 3 optimal scores 8.
    (report.optimal_count() as f64 / total as f64 * CATEGORY_MAX as f64) as Score
}

fn completeness_score(completeness: &CompletenessAssessment, min_word_count: usize) -> Score {
    let mut score = 0;
    if completeness.word_count >= min_word_count {
        score += 10;
    }
    if completeness.has_intro {
        score += 5;
    }
    if completeness.has_conclusion {
        score += 5;
    }
    if completeness.has_bullet_points {
        score += 3;
    }
    if completeness.has_call_to_action {
        score += 2;
    }
    score
}

fn dedupe<'a>(recommendations: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    recommendations
        .filter(|&recommendation| seen.insert(recommendation.as_str()))
        .cloned()
        .collect()
}

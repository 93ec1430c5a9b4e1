use super::text;
use crate::error::Result;
use crate::types::config::Thresholds;
use crate::types::report::{KeywordAssessment, KeywordLabel, KeywordReport};
use regex::{Regex, RegexBuilder};

/// Case-insensitive whole-word matcher for one keyword.
fn keyword_pattern(keyword: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

pub fn count_occurrences(content: &str, keyword: &str) -> Result<usize> {
    Ok(keyword_pattern(keyword)?.find_iter(content).count())
}

/// Occurrences as a percentage of all whitespace-separated words.
pub fn density_percent(occurrences: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    occurrences as f64 / total_words as f64 * 100.0
}

fn classify(occurrences: usize, density: f64, thresholds: &Thresholds) -> KeywordLabel {
    if occurrences == 0 {
        KeywordLabel::Missing
    } else if occurrences == 1 {
        KeywordLabel::Underused
    } else if density > thresholds.overused_density {
        KeywordLabel::Overused
    } else if density >= thresholds.optimal_density_min && density <= thresholds.optimal_density_max
    {
        KeywordLabel::Optimal
    } else {
        KeywordLabel::Present
    }
}

pub fn assess_keywords(
    content: &str,
    keywords: &[&str],
    thresholds: &Thresholds,
) -> Result<KeywordReport> {
    let total_words = text::word_count(content);
    let headings_text = text::headings(content)
        .iter()
        .map(|heading| heading.text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let intro = text::leading_words(content, thresholds.intro_window_words).to_lowercase();

    let mut assessments = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let needle = keyword.to_lowercase();
        let occurrence_count = count_occurrences(content, keyword)?;
        let density = density_percent(occurrence_count, total_words);
        let appears_in_headings = headings_text.contains(&needle);
        let appears_in_intro = intro.contains(&needle);
        let label = classify(occurrence_count, density, thresholds);

        let mut recommendations = Vec::new();
        match label {
            KeywordLabel::Missing => {
                recommendations.push(format!("Add the keyword '{keyword}' to your content."))
            }
            KeywordLabel::Underused => recommendations.push(format!(
                "Use the keyword '{keyword}' more frequently throughout the content."
            )),
            KeywordLabel::Overused => recommendations.push(format!(
                "Reduce usage of '{keyword}' to avoid keyword stuffing."
            )),
            KeywordLabel::Optimal | KeywordLabel::Present => {}
        }
        if occurrence_count > 0 && !appears_in_headings {
            recommendations.push(format!("Include '{keyword}' in at least one heading."));
        }
        if occurrence_count > 0 && !appears_in_intro {
            recommendations.push(format!("Include '{keyword}' in the introduction section."));
        }

        tracing::debug!(
            keyword = %keyword,
            occurrence_count,
            density,
            label = %label,
            "keyword assessed"
        );

        assessments.push(KeywordAssessment {
            keyword: keyword.to_string(),
            occurrence_count,
            density_percent: (density * 100.0).round() / 100.0,
            appears_in_headings,
            appears_in_intro,
            label,
            recommendations,
        });
    }

    let overall_summary = summarize(&assessments);
    Ok(KeywordReport {
        keywords: assessments,
        overall_summary,
    })
}

fn summarize(assessments: &[KeywordAssessment]) -> String {
    let total = assessments.len();
    let missing = assessments
        .iter()
        .filter(|assessment| assessment.label == KeywordLabel::Missing)
        .count();
    let optimal = assessments
        .iter()
        .filter(|assessment| assessment.label == KeywordLabel::Optimal)
        .count();

    if missing == total {
        "No target keywords found in content.".to_string()
    } else if optimal == total {
        "All keywords are used optimally.".to_string()
    } else {
        format!("{optimal} of {total} keywords used optimally.")
    }
}

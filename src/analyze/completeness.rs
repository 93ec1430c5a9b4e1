use super::text;
use crate::types::config::Thresholds;
use crate::types::report::CompletenessAssessment;

pub const CTA_PHRASES: [&str; 6] = [
    "learn more",
    "sign up",
    "get started",
    "contact us",
    "call now",
    "subscribe",
];

const BULLET_MARKERS: [char; 3] = ['•', '*', '-'];

pub fn assess_completeness(
    content: &str,
    min_word_count: usize,
    thresholds: &Thresholds,
) -> CompletenessAssessment {
    let word_count = text::word_count(content);
    let paragraphs = text::paragraphs(content);
    let is_section =
        |paragraph: &&str| text::word_count(paragraph) >= thresholds.section_min_words;

    // A single paragraph may count as both intro and conclusion.
    let has_intro = paragraphs.first().is_some_and(is_section);
    let has_conclusion = paragraphs.last().is_some_and(is_section);
    // Bare marker characters, so ordinary hyphens count too.
    let has_bullet_points = content.contains(&BULLET_MARKERS[..]);
    let lowered = content.to_lowercase();
    let has_call_to_action = CTA_PHRASES.iter().any(|phrase| lowered.contains(phrase));

    let mut recommendations = Vec::new();
    if word_count < min_word_count {
        recommendations.push(format!(
            "Increase content length to at least {min_word_count} words (currently {word_count})."
        ));
    }
    if !has_intro {
        recommendations.push(format!(
            "Add a proper introduction section (at least {} words).",
            thresholds.section_min_words
        ));
    }
    if !has_conclusion {
        recommendations.push(format!(
            "Add a proper conclusion section (at least {} words).",
            thresholds.section_min_words
        ));
    }
    if !has_bullet_points && word_count > thresholds.list_suggestion_words {
        recommendations
            .push("Add bullet points or lists to break up long text sections.".to_string());
    }
    if !has_call_to_action {
        recommendations.push(
            "Add a clear call-to-action (CTA) to guide readers on next steps.".to_string(),
        );
    }

    let assessment = if recommendations.is_empty() {
        "Content structure assessment: Content is well-structured and complete.".to_string()
    } else {
        format!(
            "Content structure assessment: Content needs improvement ({} issues found).",
            recommendations.len()
        )
    };

    CompletenessAssessment {
        word_count,
        has_intro,
        has_conclusion,
        has_bullet_points,
        has_call_to_action,
        assessment,
        recommendations,
    }
}

use super::text;
use crate::types::report::HeadingAssessment;

const SECTION_HEADINGS_MIN_CHARS: usize = 300;
const SUBSECTION_HEADINGS_MIN_CHARS: usize = 1000;
const MAX_SECTION_HEADINGS: usize = 7;

pub fn assess_headings(content: &str) -> HeadingAssessment {
    let mut counts = [0usize; 4];
    for heading in text::headings(content) {
        counts[heading.level - 1] += 1;
    }
    let [h1_count, h2_count, h3_count, h4_count] = counts;
    let length = content.chars().count();

    let mut recommendations = Vec::new();
    let mut notes = Vec::new();

    if h1_count == 0 {
        recommendations.push("Add an H1 heading (main title) to your content.".to_string());
        notes.push("Missing H1 heading.");
    } else if h1_count > 1 {
        recommendations.push("Use only one H1 heading per page for proper SEO.".to_string());
        notes.push("Multiple H1 headings detected.");
    }

    if h2_count == 0 && length > SECTION_HEADINGS_MIN_CHARS {
        recommendations.push("Break content into sections using H2 headings.".to_string());
        notes.push("No section headings (H2) found.");
    }

    if h2_count > 0 && h3_count == 0 && length > SUBSECTION_HEADINGS_MIN_CHARS {
        recommendations.push(
            "Consider using H3 headings for subsections within major sections.".to_string(),
        );
    }

    if h2_count > MAX_SECTION_HEADINGS {
        recommendations.push(
            "Consider consolidating some sections - too many H2 headings can dilute focus."
                .to_string(),
        );
    }

    if h3_count > 0 && h2_count == 0 {
        recommendations.push(
            "Fix heading hierarchy: H3 headings should be used after H2 headings, not directly after H1."
                .to_string(),
        );
        notes.push("Improper heading hierarchy.");
    }

    if h4_count > 0 && h3_count == 0 {
        recommendations.push(
            "Fix heading hierarchy: H4 headings should be used after H3 headings.".to_string(),
        );
        notes.push("Improper heading hierarchy.");
    }

    let assessment = if recommendations.is_empty() {
        recommendations
            .push("Maintain consistent heading hierarchy for future content.".to_string());
        "Heading structure looks good.".to_string()
    } else if notes.is_empty() {
        "Heading structure analysis: minor improvements suggested.".to_string()
    } else {
        format!("Heading structure analysis: {}", notes.join(" "))
    };

    tracing::debug!(h1_count, h2_count, h3_count, h4_count, "headings counted");

    HeadingAssessment {
        h1_count,
        h2_count,
        h3_count,
        h4_count,
        assessment,
        recommendations,
    }
}

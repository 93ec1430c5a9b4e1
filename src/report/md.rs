use crate::types::report::ContentScoreReport;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn to_markdown(report: &ContentScoreReport, max_recommendations: usize) -> String {
    let mut output = String::new();
    output.push_str("# Content Analysis Results\n\n");
    output.push_str(&format!(
        "## Overall SEO Score: {}/100\n\n",
        report.total_score
    ));
    output.push_str(&format!(
        "**{}.** {}\n\n",
        report.band,
        report.band.summary()
    ));

    output.push_str("## Content Overview\n\n");
    let completeness = &report.completeness;
    output.push_str(&format!("- **Word Count:** {} words", completeness.word_count));
    if completeness.word_count < report.min_word_count {
        output.push_str(&format!(
            " (Recommended: {}+ words)\n",
            report.min_word_count
        ));
    } else {
        output.push('\n');
    }
    output.push_str(&format!(
        "- **Headings:** {} H1, {} H2, {} H3\n",
        report.headings.h1_count, report.headings.h2_count, report.headings.h3_count
    ));
    output.push_str(&format!(
        "- **Readability:** {} ({:.1} words per sentence)\n",
        report.readability.label, report.readability.avg_words_per_sentence
    ));
    output.push_str(&format!(
        "- **Target Keywords:** {}\n\n",
        report.keywords.keywords.len()
    ));

    output.push_str("## Keyword Analysis\n\n");
    output.push_str("| Keyword | Occurrences | Density | In Headings | In Intro | Assessment |\n");
    output.push_str("|---------|-------------|---------|-------------|----------|------------|\n");
    // Density is already rounded to two places; print it without padding zeros.
    for keyword in &report.keywords.keywords {
        output.push_str(&format!(
            "| {} | {} | {:?}% | {} | {} | {} |\n",
            keyword.keyword,
            keyword.occurrence_count,
            keyword.density_percent,
            yes_no(keyword.appears_in_headings),
            yes_no(keyword.appears_in_intro),
            keyword.label
        ));
    }
    output.push_str(&format!("\n{}\n\n", report.keywords.overall_summary));

    output.push_str("## Top Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for (index, recommendation) in report
            .recommendations
            .iter()
            .take(max_recommendations)
            .enumerate()
        {
            output.push_str(&format!("{}. {}\n", index + 1, recommendation));
        }
        let remaining = report.recommendations.len().saturating_sub(max_recommendations);
        if remaining > 0 {
            output.push_str(&format!(
                "\n*Plus {remaining} more recommendations...*\n"
            ));
        }
    }

    output
}

use super::text;
use crate::types::config::Thresholds;
use crate::types::report::{ReadabilityAssessment, ReadabilityLabel};

pub fn assess_readability(content: &str, thresholds: &Thresholds) -> ReadabilityAssessment {
    let sentence_count = text::sentences(content).len();
    let total_words = text::word_count(content);
    let paragraphs = text::paragraphs(content);
    let paragraph_count = paragraphs.len();

    if sentence_count == 0 || total_words == 0 {
        return ReadabilityAssessment {
            label: ReadabilityLabel::Invalid,
            avg_words_per_sentence: 0.0,
            sentence_count,
            paragraph_count,
            assessment: "Unable to analyze empty content.".to_string(),
            recommendations: vec!["Add meaningful content to analyze.".to_string()],
        };
    }

    let avg = total_words as f64 / sentence_count as f64;
    let (label, assessment, mut recommendations) = if avg > thresholds.difficult_sentence_words {
        (
            ReadabilityLabel::Difficult,
            "Content may be difficult to read due to long sentences.",
            vec![
                "Consider breaking longer sentences into shorter ones.".to_string(),
                "Aim for an average of 15-20 words per sentence.".to_string(),
            ],
        )
    } else if avg > thresholds.moderate_sentence_words {
        (
            ReadabilityLabel::Moderate,
            "Content has reasonable readability but could be improved.",
            vec!["Some sentences could be shortened for better readability.".to_string()],
        )
    } else {
        (
            ReadabilityLabel::Good,
            "Content has good readability with appropriate sentence length.",
            vec!["Maintain this level of clarity throughout all content.".to_string()],
        )
    };

    let long_paragraphs = paragraphs
        .iter()
        .filter(|paragraph| text::word_count(paragraph) > thresholds.long_paragraph_words)
        .count();
    if long_paragraphs > 0
        && long_paragraphs as f64 / paragraph_count as f64 > thresholds.long_paragraph_ratio
    {
        recommendations.push("Consider breaking long paragraphs into smaller chunks.".to_string());
    }

    tracing::debug!(
        sentences = sentence_count,
        words = total_words,
        paragraphs = paragraph_count,
        long_paragraphs,
        avg,
        "readability measured"
    );

    ReadabilityAssessment {
        label,
        avg_words_per_sentence: (avg * 10.0).round() / 10.0,
        sentence_count,
        paragraph_count,
        assessment: assessment.to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_of(words: usize) -> String {
        let mut sentence = vec!["word"; words].join(" ");
        sentence.push('.');
        sentence
    }

    #[test]
    fn short_sentences_read_well() {
        let result = assess_readability("The cat sat. The dog ran.", &Thresholds::default());
        assert_eq!(result.label, ReadabilityLabel::Good);
        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.avg_words_per_sentence, 3.0);
        assert_eq!(
            result.recommendations,
            vec!["Maintain this level of clarity throughout all content.".to_string()]
        );
    }

    #[test]
    fn boundaries_are_exclusive_at_lower_bound() {
        let thresholds = Thresholds::default();
        assert_eq!(
            assess_readability(&sentence_of(20), &thresholds).label,
            ReadabilityLabel::Good
        );
        assert_eq!(
            assess_readability(&sentence_of(21), &thresholds).label,
            ReadabilityLabel::Moderate
        );
        assert_eq!(
            assess_readability(&sentence_of(25), &thresholds).label,
            ReadabilityLabel::Moderate
        );
        let difficult = assess_readability(&sentence_of(26), &thresholds);
        assert_eq!(difficult.label, ReadabilityLabel::Difficult);
        assert_eq!(difficult.recommendations.len(), 2);
    }

    #[test]
    fn empty_content_is_invalid_without_dividing() {
        let result = assess_readability("   ", &Thresholds::default());
        assert_eq!(result.label, ReadabilityLabel::Invalid);
        assert_eq!(result.avg_words_per_sentence, 0.0);
        assert_eq!(
            result.recommendations,
            vec!["Add meaningful content to analyze.".to_string()]
        );
    }

    #[test]
    fn punctuation_only_content_is_invalid() {
        let result = assess_readability("... !!! ???", &Thresholds::default());
        assert_eq!(result.label, ReadabilityLabel::Invalid);
    }

    #[test]
    fn mostly_long_paragraphs_trigger_chunking_advice() {
        let long = (0..11)
            .map(|_| sentence_of(10))
            .collect::<Vec<_>>()
            .join(" ");
        let content = format!("{long}\n\nShort one.");
        let result = assess_readability(&content, &Thresholds::default());
        assert_eq!(result.paragraph_count, 2);
        assert!(result
            .recommendations
            .iter()
            .any(|rec| rec.contains("breaking long paragraphs")));
    }

    #[test]
    fn few_long_paragraphs_do_not_trigger_chunking_advice() {
        let long = (0..11)
            .map(|_| sentence_of(10))
            .collect::<Vec<_>>()
            .join(" ");
        let content = format!("{long}\n\nA.\n\nB.\n\nC.");
        let result = assess_readability(&content, &Thresholds::default());
        assert!(!result
            .recommendations
            .iter()
            .any(|rec| rec.contains("breaking long paragraphs")));
    }
}

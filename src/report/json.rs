use crate::types::report::ContentScoreReport;

pub fn to_json(report: &ContentScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::types::config::Thresholds;
    use crate::types::request::AnalysisRequest;

    #[test]
    fn json_report_contains_scores_and_labels() {
        let request = AnalysisRequest::new(
            "# Guide\n\nseo tips for everyone.",
            vec!["seo".to_string()],
            300,
        );
        let report = analyze(&request, &Thresholds::default()).expect("report should build");

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert_eq!(value["total_score"], report.total_score);
        assert_eq!(value["readability"]["label"], "Good");
        assert_eq!(value["keywords"]["keywords"][0]["label"], "Underused");
        assert_eq!(value["keywords"]["keywords"][0]["keyword"], "seo");
        assert!(value["recommendations"].is_array());
    }

    #[test]
    fn needs_work_band_serializes_with_space() {
        let request = AnalysisRequest::new("x", vec!["seo".to_string()], 300);
        let report = analyze(&request, &Thresholds::default()).expect("report should build");
        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"band\": \"Needs Work\""));
    }
}

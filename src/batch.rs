use crate::analyze::analyze;
use crate::error::{Result, ScorerError};
use crate::report::OutputFormat;
use crate::types::config::Thresholds;
use crate::types::request::{validate_scoring_options, AnalysisRequest};
use crate::types::scoring::{Score, ScoreBand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const DRAFT_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Scored {
        score: Score,
        band: ScoreBand,
        word_count: usize,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub path: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub root: String,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.entries.iter().filter_map(|entry| match entry.outcome {
            BatchOutcome::Scored { score, .. } => Some(score),
            BatchOutcome::Failed { .. } => None,
        })
    }

    pub fn average_score(&self) -> Option<f64> {
        let scores: Vec<Score> = self.scores().collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().map(|score| *score as f64).sum::<f64>() / scores.len() as f64)
    }

    pub fn lowest_score(&self) -> Option<Score> {
        self.scores().min()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, BatchOutcome::Failed { .. }))
            .count()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_draft(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            DRAFT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
}

/// Draft files under `root`, sorted by path, skipping hidden entries.
pub fn discover_drafts(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_draft(entry.path()))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

pub fn score_directory(
    root: &Path,
    keywords: &[String],
    min_word_count: usize,
    thresholds: &Thresholds,
) -> Result<BatchReport> {
    if !root.is_dir() {
        return Err(ScorerError::PathNotFound(root.display().to_string()));
    }
    // Options shared by every draft fail once, not per file.
    validate_scoring_options(keywords, min_word_count)?;

    let drafts = discover_drafts(root);
    tracing::info!(root = %root.display(), drafts = drafts.len(), "scoring drafts");

    let entries = drafts
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(path.as_path())
                .display()
                .to_string();
            let outcome = match score_file(path, keywords, min_word_count, thresholds) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(path = %relative, error = %e, "draft could not be scored");
                    BatchOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            BatchEntry {
                path: relative,
                outcome,
            }
        })
        .collect();

    Ok(BatchReport {
        root: root.display().to_string(),
        entries,
    })
}

fn score_file(
    path: &Path,
    keywords: &[String],
    min_word_count: usize,
    thresholds: &Thresholds,
) -> Result<BatchOutcome> {
    let content = std::fs::read_to_string(path)?;
    let request = AnalysisRequest::new(content, keywords.to_vec(), min_word_count);
    let report = analyze(&request, thresholds)?;
    Ok(BatchOutcome::Scored {
        score: report.total_score,
        band: report.band,
        word_count: report.completeness.word_count,
    })
}

pub fn to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Content Batch Results\n\n");
    output.push_str(&format!("Directory: {}\n\n", report.root));

    if report.entries.is_empty() {
        output.push_str("- no drafts found\n");
        return output;
    }

    output.push_str("| File | Score | Band | Words |\n");
    output.push_str("|------|-------|------|-------|\n");
    for entry in &report.entries {
        match &entry.outcome {
            BatchOutcome::Scored {
                score,
                band,
                word_count,
            } => output.push_str(&format!(
                "| {} | {}/100 | {} | {} |\n",
                entry.path, score, band, word_count
            )),
            BatchOutcome::Failed { error } => {
                output.push_str(&format!("| {} | - | error: {} | - |\n", entry.path, error))
            }
        }
    }

    output.push('\n');
    if let Some(average) = report.average_score() {
        output.push_str(&format!("Average score: {average:.1}/100\n"));
    }
    if report.failed_count() > 0 {
        output.push_str(&format!("Failed drafts: {}\n", report.failed_count()));
    }
    output
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Md => Ok(to_markdown(report)),
    }
}

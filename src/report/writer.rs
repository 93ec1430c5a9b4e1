use crate::error::{Result, ScorerError};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Persists a rendered report.
///
/// An existing directory target receives a timestamped `content-report-*` file;
/// any other target is written as-is, creating parent directories first.
pub fn write_report(target: &Path, rendered: &str, extension: &str) -> Result<PathBuf> {
    let out_path = if target.is_dir() {
        let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
        target.join(format!("content-report-{stamp}.{extension}"))
    } else {
        target.to_path_buf()
    };

    if let Some(parent) = out_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ScorerError::Io)?;
    }
    fs::write(&out_path, rendered).map_err(ScorerError::Io)?;
    tracing::info!(path = %out_path.display(), bytes = rendered.len(), "report written");
    Ok(out_path)
}

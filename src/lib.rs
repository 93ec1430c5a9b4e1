pub mod analyze;
pub mod batch;
pub mod config;
pub mod error;
pub mod report;
pub mod tool;
pub mod types;

pub use analyze::analyze;
pub use error::{Result, ScorerError};
pub use types::config::{Settings, Thresholds};
pub use types::report::ContentScoreReport;
pub use types::request::AnalysisRequest;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("keyword pattern error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;

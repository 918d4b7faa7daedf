use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl RadarError {
    /// Short label recorded in feed-health bookkeeping.
    pub fn kind(&self) -> &'static str {
        match self {
            RadarError::Http(_) => "http",
            RadarError::Timeout(_) => "timeout",
            RadarError::Parse(_) => "parse",
            RadarError::Database(_) => "database",
            RadarError::Render(_) => "render",
            RadarError::Config(_) => "config",
            RadarError::Validation(_) => "validation",
            RadarError::Anyhow(_) => "other",
        }
    }
}

pub type Result<T> = std::result::Result<T, RadarError>;

use thiserror::Error;

/// Errors raised at the edges of the analysis core (ingest and configuration).
///
/// The analysis functions themselves are total and never return this type.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid event at index {index}: {reason}")]
    InvalidEvent { index: usize, reason: String },
}

impl AnalysisError {
    /// True when the caller can still proceed with default settings or
    /// a partial event list.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AnalysisError::InvalidConfig(_) => true,
            AnalysisError::InvalidEvent { .. } => true,
            AnalysisError::InvalidInput(_) => false,
            AnalysisError::Io(_) => false,
            AnalysisError::Json(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Analyze a food item first to enable this feature.")]
    AnalysisRequired,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    InvalidResponseFormat(String),

    #[error("Internal server error")]
    InternalServerError,
}

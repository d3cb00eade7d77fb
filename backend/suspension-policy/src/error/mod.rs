use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Unknown violation category: {0}")]
    UnknownCategory(String),

    #[error("Unknown severity level: {0}")]
    UnknownSeverity(String),

    #[error("Unknown report status: {0}")]
    UnknownReportStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Environment error: {0}")]
    Env(#[from] envy::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl PolicyError {
    /// Stable machine-readable code for the admin UI
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            PolicyError::UnknownSeverity(_) => "UNKNOWN_SEVERITY",
            PolicyError::UnknownReportStatus(_) => "UNKNOWN_REPORT_STATUS",
            PolicyError::Config(_) | PolicyError::Validation(_) => "INVALID_CONFIG",
            PolicyError::Env(_) => "ENV_ERROR",
            PolicyError::Io(_) => "IO_ERROR",
            PolicyError::Json(_) => "MALFORMED_REQUEST",
        }
    }

    /// True when the caller handed the engine data it should never have sent.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            PolicyError::UnknownCategory(_)
                | PolicyError::UnknownSeverity(_)
                | PolicyError::UnknownReportStatus(_)
                | PolicyError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PolicyError>;

//! Error types for the query performance dashboard

/// Errors that can occur in the dashboard service
#[derive(Debug, thiserror::Error)]
pub enum QueryPerfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, QueryPerfError>;

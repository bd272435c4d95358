use std::io;

/// Errors that can occur during rerunner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Test runner exited with status {code}")]
    RunnerFailed { code: i32 },

    #[error("Report tool exited with status {code}")]
    ReportFailed { code: i32 },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for rerunner operations
pub type Result<T> = std::result::Result<T, Error>;

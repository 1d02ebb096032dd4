use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid skill request: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Why a level lookup produced no report.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level request timed out")]
    Timeout,
    #[error("level request failed: {0}")]
    Transport(String),
    #[error("level api returned status {0}")]
    Status(u16),
    #[error("level payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

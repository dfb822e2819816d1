use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("No game at position {0}")]
    RecordNotFound(usize),

    #[error("Incomplete game: {0}")]
    InvalidRecord(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Import failed: {0}")]
    Import(String),
}

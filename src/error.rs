use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Error parsing statement beginning and end dates.")]
    PatternNotFound,

    #[error("No transactions matched while parsing the statement.")]
    EmptyStatement,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;

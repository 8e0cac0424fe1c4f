use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller supplied unusable input, e.g. blank text to summarize.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Digest not found for {0}")]
    NotFound(NaiveDate),

    /// The remote summarizer failed. Absorbed by the summarization fallback.
    #[error("Remote summarizer unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Article source error: {0}")]
    Source(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

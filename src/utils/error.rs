// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Missing document landmark: {0}")]
    MalformedDocument(String),

    #[error("Date field does not match its expected pattern: {0}")]
    DateFormat(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search query must be a single word, got {0:?}")]
    InvalidQuery(String),

    #[error("No field named {0:?} on this plan")]
    FieldNotFound(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

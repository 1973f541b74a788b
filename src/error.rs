//! Error handling for the tag extractor

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Stop words file not selected and bundled file not found: {}", .0.display())]
    StopWordsUnavailable(PathBuf),

    #[error("No tags to save. Run extraction first.")]
    EmptyReport,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TagExtractorError>;

impl TagExtractorError {
    /// Wrap an IO error with the path it occurred on, keeping its kind
    pub fn io_at(path: &Path, err: io::Error) -> Self {
        TagExtractorError::Io(io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }

    /// The underlying `io::ErrorKind`, if this is an IO failure
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            TagExtractorError::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}

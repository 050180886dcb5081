use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of the mapping run.
///
/// Schema mismatches are deliberately absent: a source missing a required
/// canonical column is reported as a [`crate::SchemaReport`] warning and the
/// run continues.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error("invalid concept catalog {path}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },
    #[error("failed to write {path}: {reason}")]
    Serialization { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;

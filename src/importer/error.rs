// ==========================================
// Manufacturing Operations KPI Backend - Importer error types
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Importer layer error type
///
/// Per-row problems are not errors at this level; they are collected
/// into the import report. These variants abort the whole run.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage failed: {0}")]
    Storage(#[from] RepositoryError),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

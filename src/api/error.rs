// ==========================================
// Manufacturing Operations KPI Backend - API layer error types
// ==========================================
// Responsibility: translate repository errors into messages the
// dashboard can show; every error carries an explicit reason
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Business rule errors =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    // ===== Data access errors =====
    #[error("database error: {0}")]
    DatabaseError(String),

    // ===== Generic errors =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Translate repository-layer failures into user-facing API errors
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} with id={}", entity, id))
            }
            RepositoryError::ValidationError(msg) => ApiError::InvalidInput(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

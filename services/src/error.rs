use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure raised by any service call.
///
/// The API layer maps each variant onto one HTTP status.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                tracing::debug!(%msg, "unique constraint violated");
                ServiceError::Conflict("Resource already exists".into())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                tracing::debug!(%msg, "foreign key constraint violated");
                ServiceError::Validation("Referenced resource does not exist".into())
            }
            _ => ServiceError::Database(err),
        }
    }
}

impl ServiceError {
    pub fn not_found(what: &str) -> Self {
        ServiceError::NotFound(format!("{what} not found"))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

//! Shared database types for Jobly
//!
//! Classifies store failures so constraint violations caused by client input
//! surface as validation errors rather than generic database failures.

use crate::error::Error;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Referenced record does not exist ({0})")]
    MissingReference(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation => {
                    let constraint = db_err.constraint().unwrap_or("foreign key");
                    return RepositoryError::MissingReference(constraint.to_string());
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    return RepositoryError::InvalidData(db_err.message().to_string());
                }
                _ => {}
            }
        }
        if matches!(err, sqlx::Error::RowNotFound) {
            return RepositoryError::NotFound;
        }
        RepositoryError::Connection(err)
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::MissingReference(_) | RepositoryError::InvalidData(_) => {
                Error::Validation(err.to_string())
            }
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}

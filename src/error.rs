use thiserror::Error;

/// Why an authentication attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("unknown user")]
    UnknownUser,
    #[error("wrong pin")]
    WrongPin,
}

/// Error taxonomy shared by the store, auth and handler layers.
///
/// `NotFound`, `Duplicate` and `Auth` are expected business outcomes; the
/// handlers translate them into a status string. `Storage` is logged and
/// reported as a generic server error. `Config` aborts startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,
    #[error("duplicate record")]
    Duplicate,
    #[error("authentication failed: {0}")]
    Auth(AuthFailure),
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Collapses a sqlx error into `Duplicate` when the underlying database
    /// rejected the statement on a UNIQUE constraint. The schema constraint
    /// is the authoritative uniqueness guarantee; the handler-level
    /// pre-checks only exist for friendlier messages.
    pub fn from_write_error(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                AppError::Duplicate
            }
            _ => AppError::Storage(err),
        }
    }
}

use thiserror::Error;

/// Postgres SQLSTATE for a value that does not fit its column (e.g. an over-long `VARCHAR`).
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Unified error type for store operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// A row was rejected by a column or check constraint
    #[error("Check constraint violation")]
    CheckViolation {
        constraint: Option<String>,
        table: Option<String>,
        message: String,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using sqlx's error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err)
                if db_err.is_check_violation() || db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) =>
            {
                DbError::CheckViolation {
                    constraint: db_err.constraint().map(|s| s.to_string()),
                    table: db_err.table().map(|s| s.to_string()),
                    message: db_err.message().to_string(),
                }
            }
            // Connection failures, missing tables and the like are not recoverable here
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for store operation results
pub type Result<T> = std::result::Result<T, DbError>;

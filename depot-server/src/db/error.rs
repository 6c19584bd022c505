//! Repository error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    #[error("duplicated: {resource}")]
    Duplicated { resource: &'static str },
}

impl DbError {
    /// Classify an error raised by an INSERT or UPDATE.
    ///
    /// Unique violations (SQLSTATE 23505) become [`DbError::Duplicated`].
    pub(crate) fn from_write(err: sqlx::Error, resource: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Duplicated { resource }
            }
            _ => Self::Sqlx(err),
        }
    }
}

//! Error types for depot-server startup

use thiserror::Error;

use crate::http::ServerError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

pub type Result<T> = std::result::Result<T, Error>;

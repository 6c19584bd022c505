//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One pool, created by the caller and injected into every repository
//! - Ids come from identity columns - no count-then-insert
//! - Single statements only - no transactions spanning calls
//! - Only "no rows" and unique violations are translated; everything else
//!   passes through as [`DbError::Sqlx`]

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, DatabaseConfig};
pub use repos::*;
pub use schema::ensure_schema;

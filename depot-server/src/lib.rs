//! depot-server: HTTP API for products and warehouses
//!
//! Translates JSON requests into parameterized SQL against two PostgreSQL
//! tables and maps the outcome back to JSON:
//!
//! - [`models`] - domain types and input validation errors
//! - [`db`] - pool, schema bootstrap and repositories
//! - [`http`] - router, handlers, extractors and error mapping

pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use db::{create_pool, ensure_schema, DatabaseConfig, DbError};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};

/// Connect, optionally bootstrap the schema, then serve until shutdown.
pub async fn serve(
    database: DatabaseConfig,
    server: ServerConfig,
    bootstrap_schema: bool,
) -> Result<()> {
    let pool = create_pool(&database).await?;
    tracing::info!(max_connections = database.max_connections, "Database pool ready");

    if bootstrap_schema {
        ensure_schema(&pool).await?;
    }

    run_server(pool, server).await?;
    Ok(())
}

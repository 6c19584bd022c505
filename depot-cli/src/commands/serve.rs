//! HTTP server command
//!
//! Connects to PostgreSQL, bootstraps the schema, and serves the product and
//! warehouse API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use depot_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use depot_server::{DatabaseConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "DEPOT_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DEPOT_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,
}

impl ServeArgs {
    fn configs(self) -> Result<(DatabaseConfig, ServerConfig, bool)> {
        let url = self
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let database = DatabaseConfig {
            url,
            max_connections: self.max_connections,
        };
        let server = ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        };

        Ok((database, server, !self.skip_schema))
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let (database, server, bootstrap_schema) = args.configs()?;

    tracing::info!("Starting depot server on {}", server.bind_addr);

    // Blocks until shutdown
    depot_server::serve(database, server, bootstrap_schema)
        .await
        .context("Server error")?;

    Ok(())
}

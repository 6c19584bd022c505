//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing and panic recovery
//! - Graceful shutdown
//! - JSON success envelopes and JSON error responses

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::Envelope;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};

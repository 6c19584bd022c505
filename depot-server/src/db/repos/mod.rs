//! Repository implementations for database access
//!
//! Each resource has a trait (the seam handlers depend on) and a
//! PostgreSQL implementation that owns a clone of the shared pool.

pub mod products;
pub mod warehouses;

pub use products::{PgProductRepo, ProductRepository};
pub use warehouses::{PgWarehouseRepo, WarehouseRepository};

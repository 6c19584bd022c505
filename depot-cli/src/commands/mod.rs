//! Command implementations for the depot CLI

pub mod serve;

pub use serve::run_serve;

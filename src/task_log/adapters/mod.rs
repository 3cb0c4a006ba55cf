//! Adapter implementations for task log ports.
//!
//! - [`memory`]: lock-guarded in-process storage for tests and database-less
//!   runs
//! - [`postgres`]: Diesel-backed `PostgreSQL` storage

pub mod memory;
pub mod postgres;

//! Completed-task log with watermark-stable pagination.
//!
//! A reader's first request captures a watermark timestamp. Every later page
//! of the same browsing session reuses it, so only the page offset advances
//! and rows completed after the watermark never appear. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Port contracts for the task log.
//!
//! Ports define infrastructure-agnostic interfaces used by task log services.

pub mod identity;
pub mod repository;

pub use identity::{CurrentUserProvider, FixedUserProvider};
pub use repository::{
    CompletedTaskRepository, CompletedTaskRepositoryError, CompletedTaskRepositoryResult,
};

#[cfg(test)]
pub use repository::MockCompletedTaskRepository;

//! Tasklog: a visitor greeter and a paginated completed-task log.
//!
//! The crate serves two small web endpoints. The greeter tells first-time
//! visitors apart from returning ones with a `seen` cookie. The task log
//! lists a user's completed tasks, newest first, three per page, using a
//! watermark-stable cursor so that tasks completed while a reader is paging
//! never shift the pages they have not seen yet.
//!
//! # Architecture
//!
//! The task log follows hexagonal architecture principles:
//!
//! - **Domain**: cursor parsing, pagination maths, and task values
//! - **Ports**: the completed-task repository and the current-user provider
//! - **Adapters**: in-memory and `PostgreSQL` repositories
//!
//! # Modules
//!
//! - [`config`]: command-line and environment configuration
//! - [`http`]: axum router, handlers, and HTML rendering
//! - [`task_log`]: completed-task listing, seeding, and reset
//! - [`visitor`]: cookie-based visitor greeting

pub mod config;
pub mod http;
pub mod task_log;
pub mod visitor;

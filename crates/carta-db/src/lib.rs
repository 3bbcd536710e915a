//! Carta DB — SurrealDB connection management and repository
//! implementations.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Repository implementations for the `carta-core` traits
//! - The menu reference validator ([`MenuRefValidator`])
//! - Error types ([`DbError`])
//!
//! Every store operation runs under the configured per-operation
//! deadline and surfaces [`carta_core::CartaError::Timeout`] when it
//! elapses.

mod connection;
mod deadline;
mod error;
mod pagination;
pub mod repository;
mod schema;
mod validate;

pub use connection::{DEFAULT_OPERATION_TIMEOUT, DbConfig, DbManager};
pub use error::DbError;
pub use pagination::build_page_query;
pub use schema::{run_migrations, schema_v1};
pub use validate::MenuRefValidator;

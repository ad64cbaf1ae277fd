//! Database abstraction layer.
//!
//! Trait-based data access so the storage backend (PostgreSQL in
//! production, SQLite for local use and tests) can be swapped without
//! touching the MCP layer.
//!
//! # Architecture
//!
//! - `config`: Connection settings read from the environment
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Content)
//! - `repository`: Trait definitions for data access
//! - `postgres` / `sqlite`: sqlx-backed implementations

mod config;
mod error;
mod models;
pub mod postgres;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod error_test;

pub use config::{Backend, DbConfig};
pub use error::{DbError, DbResult};
pub use models::*;
pub use postgres::PostgresDatabase;
pub use repository::*;
pub use sqlite::SqliteDatabase;

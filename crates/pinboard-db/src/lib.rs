//! Data layer for the Pinboard service (`PostgreSQL`).
//!
//! `PostgreSQL` is the authoritative store for posts. The service holds no
//! in-memory cache; every read goes back to the database. This crate
//! provides the connection pool, the [`PostRepository`] port that the HTTP
//! layer depends on, and two adapters: the production `PostgreSQL`
//! implementation and an in-memory implementation for tests.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`repository`] -- the `PostRepository` port
//! - [`post_store`] -- `PostgreSQL` adapter
//! - [`memory`] -- in-memory adapter (tests)
//! - [`error`] -- shared error types

pub mod error;
pub mod memory;
pub mod post_store;
pub mod postgres;
pub mod repository;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::MemoryPostStore;
pub use post_store::PgPostStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use repository::PostRepository;

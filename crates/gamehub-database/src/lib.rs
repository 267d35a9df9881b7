//! # gamehub-database
//!
//! SQLite connection management and concrete repository implementations
//! for the game catalog, plus an in-memory repository used by tests and
//! the `memory` database provider.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

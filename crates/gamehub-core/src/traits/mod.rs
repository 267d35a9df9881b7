//! Core trait definitions.

pub mod repository;

pub use repository::Repository;

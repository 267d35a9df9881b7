//! # gamehub-service
//!
//! Business logic service layer for GameHub. Each service orchestrates
//! repositories to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod game;

pub use game::GameService;

//! HTTP request handlers.

pub mod game;
pub mod health;

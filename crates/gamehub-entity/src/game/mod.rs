//! Game domain entities.

pub mod model;

pub use model::{Game, GameDraft};

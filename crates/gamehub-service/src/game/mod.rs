//! Game catalog services.

pub mod service;

pub use service::GameService;

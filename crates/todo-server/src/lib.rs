//! HTTP server for the to-do backend.
//!
//! Serves the task REST API. Every handler returns a [`ServerResult`]; the
//! `IntoResponse` impl on [`ServerError`] is the single place where failures
//! become status codes. Request bodies are read through [`Payload`], which
//! turns deserialization failures into a 400 carrying the root cause message.

pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod translate;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use extract::Payload;
pub use server::TodoServer;
pub use state::AppState;

//! HTTP API Layer
//!
//! Exposes the recipe store as a JSON REST API over axum.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use server::{HttpServer, HttpServerConfig};

//! REST API server for ProductivePro.
//!
//! Four resources (notes, links, tasks, expenses), four verbs each, plus
//! a liveness probe at `/api/health`. JSON bodies throughout.

pub mod config;
pub mod error;
pub mod health;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{build_router, start, ServerHandle};
pub use state::AppState;

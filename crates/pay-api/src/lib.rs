//! # pay-api
//!
//! HTTP API layer for the checkout gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for provider listing and checkout
//! - Configuration loading and the compiled-in plugin table
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/providers` | List payment providers |
//! | POST | `/api/checkout` | Run a checkout |

pub mod config;
pub mod handlers;
pub mod plugins;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;

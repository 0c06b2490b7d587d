//! # codehive-api
//!
//! HTTP API layer for CodeHive built on Axum.
//!
//! Provides the REST endpoints, WebSocket upgrade, auth extractor,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;

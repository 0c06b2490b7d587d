//! HTTP and WebSocket handlers.

pub mod auth;
pub mod health;
pub mod project;
pub mod team;
pub mod ws;

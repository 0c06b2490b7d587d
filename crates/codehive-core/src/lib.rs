//! # codehive-core
//!
//! Core crate for CodeHive. Contains configuration schemas, realtime
//! event types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CodeHive crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

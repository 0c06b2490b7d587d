//! # codehive-entity
//!
//! Domain entity models for CodeHive. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod branch;
pub mod file_node;
pub mod project;
pub mod team;
pub mod user;

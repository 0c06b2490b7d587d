//! Realtime event fan-out.
//!
//! A single broadcast hub relays chat messages and project update
//! events to every connected WebSocket client.

pub mod hub;

pub use hub::RealtimeHub;

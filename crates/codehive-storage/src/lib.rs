//! # codehive-storage
//!
//! Content store over a local directory. Maintains two parallel trees
//! under the data root: `workspaces/` mirrors the file-node metadata
//! (one directory per project, `main/` plus `branches/`), while
//! `uploads/` holds raw directory uploads and single-file writes that
//! have no metadata rows.

pub mod content_store;
pub mod paths;

pub use content_store::ContentStore;

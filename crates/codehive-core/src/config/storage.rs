//! Content store configuration.

use serde::{Deserialize, Serialize};

/// Content store configuration.
///
/// The content store keeps two parallel trees under `data_root`:
/// `workspaces/` (mirrors the file-node metadata) and `uploads/`
/// (raw directory uploads and single-file writes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum upload size in bytes (default 512 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_data_root() -> String {
    "data".to_string()
}

fn default_max_upload() -> u64 {
    512 * 1024 * 1024
}

//! Response DTOs.

use serde::{Deserialize, Serialize};

use codehive_entity::file_node::{FileNode, UploadEntry};
use codehive_entity::project::ProjectView;
use codehive_entity::user::PublicUser;

/// Body returned by signup and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed access token.
    pub token: String,
    /// Public view of the account.
    pub user: PublicUser,
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the server is responsive.
    pub status: String,
    /// Human-readable banner.
    pub message: String,
}

/// Body returned after creating a folder or branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderResponse {
    /// Node recorded for a main-branch folder; absent for a branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FileNode>,
    /// Refreshed view of the project.
    pub project: ProjectView,
}

/// Body returned after a bulk directory upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Number of files written.
    pub count: usize,
}

/// Body returned after writing a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileResponse {
    /// Path the file was written to.
    pub file_path: String,
}

/// Body returned when listing a project's uploaded files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesResponse {
    /// Nested tree of uploaded entries.
    pub files: Vec<UploadEntry>,
}

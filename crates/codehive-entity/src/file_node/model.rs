//! File node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Whether a file node is a folder or a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "node_kind", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    /// A directory in the branch tree.
    Folder,
    /// A regular file.
    File,
}

/// A node in a branch's file tree. `(branch_id, parent_id, name)` is
/// unique; a node with `parent_id = NULL` is a root of its branch. Paths
/// are derived by walking the parent chain, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileNode {
    /// Unique node identifier.
    pub id: Uuid,
    /// Node name. Never contains path separators or traversal tokens.
    pub name: String,
    /// Folder or file.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The branch this node lives on.
    pub branch_id: Uuid,
    /// Parent node; must be a FOLDER on the same branch when present.
    pub parent_id: Option<Uuid>,
    /// When the node was created.
    pub created_at: DateTime<Utc>,
}

//! File node repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use codehive_core::error::{AppError, ErrorKind};
use codehive_core::result::AppResult;
use codehive_entity::branch::Branch;
use codehive_entity::file_node::{FileNode, NodeKind};

use super::map_unique;

/// Repository for file node rows.
#[derive(Debug, Clone)]
pub struct FileNodeRepository {
    pool: PgPool,
}

impl FileNodeRepository {
    /// Create a new file node repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a project's main branch and insert a root-level FOLDER node
    /// on it, in one transaction.
    ///
    /// Fails `NotFound` when the project has no main branch.
    pub async fn create_root_folder(
        &self,
        project_id: Uuid,
        name: &str,
    ) -> AppResult<(Branch, FileNode)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let branch = sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE project_id = $1 AND is_main = TRUE",
        )
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find main branch", e))?
        .ok_or_else(|| AppError::not_found("Main branch not found for this project"))?;

        let node = sqlx::query_as::<_, FileNode>(
            "INSERT INTO file_nodes (name, kind, branch_id, parent_id) \
             VALUES ($1, $2, $3, NULL) RETURNING *",
        )
        .bind(name)
        .bind(NodeKind::Folder)
        .bind(branch.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique(
                e,
                &format!("Folder '{name}' already exists on the main branch"),
                "Failed to create folder node",
            )
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder creation", e)
        })?;

        Ok((branch, node))
    }
}

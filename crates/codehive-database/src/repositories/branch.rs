//! Branch repository implementation.

use sqlx::PgPool;

use codehive_core::result::AppResult;
use codehive_entity::branch::{Branch, CreateBranch};

use super::map_unique;

/// Repository for branch rows.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    /// Create a new branch repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new branch. Duplicate `(project, name)` surfaces as a
    /// conflict.
    pub async fn create(&self, data: &CreateBranch) -> AppResult<Branch> {
        sqlx::query_as::<_, Branch>(
            "INSERT INTO branches (name, is_main, project_id, author_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.is_main)
        .bind(data.project_id)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique(
                e,
                &format!("Branch '{}' already exists", data.name),
                "Failed to create branch",
            )
        })
    }
}

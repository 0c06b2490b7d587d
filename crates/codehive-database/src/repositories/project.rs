//! Project repository implementation.
//!
//! Holds the project-bundle transaction: a project is never inserted
//! without its team, its main branch, and its owner membership.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use codehive_core::error::{AppError, ErrorKind};
use codehive_core::result::AppResult;
use codehive_entity::branch::Branch;
use codehive_entity::file_node::FileNode;
use codehive_entity::project::{BranchWithNodes, Project, ProjectTree};
use codehive_entity::team::TeamRole;

use super::map_unique;

/// Repository for projects and their branch/node trees.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a project bundle in one transaction: team, project, main
    /// branch, and OWNER membership commit together or not at all.
    pub async fn create_bundle(
        &self,
        owner_id: Uuid,
        name: &str,
        description: Option<&str>,
        is_private: bool,
    ) -> AppResult<(Project, Branch)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let team = sqlx::query_as::<_, codehive_entity::team::Team>(
            "INSERT INTO teams (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(format!("{name} Team"))
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create team", e))?;

        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description, is_private, owner_id, team_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(name)
        .bind(description)
        .bind(is_private)
        .bind(owner_id)
        .bind(team.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique(e, "Project already exists", "Failed to create project"))?;

        let main_branch = sqlx::query_as::<_, Branch>(
            "INSERT INTO branches (name, is_main, project_id, author_id) \
             VALUES ('main', TRUE, $1, $2) RETURNING *",
        )
        .bind(project.id)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create main branch", e)
        })?;

        sqlx::query("INSERT INTO team_members (user_id, team_id, role) VALUES ($1, $2, $3)")
            .bind(owner_id)
            .bind(team.id)
            .bind(TeamRole::Owner)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to add owner membership", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit project bundle", e)
        })?;

        Ok((project, main_branch))
    }

    /// Find a project by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// Fetch a single project with all branches and their file nodes.
    pub async fn fetch_tree(&self, project_id: Uuid) -> AppResult<Option<ProjectTree>> {
        let Some(project) = self.find_by_id(project_id).await? else {
            return Ok(None);
        };
        let mut trees = self.attach_branches(vec![project]).await?;
        Ok(trees.pop())
    }

    /// List a user's projects (owner-filtered) with their full branch and
    /// node trees, oldest first.
    pub async fn list_trees_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<ProjectTree>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))?;

        self.attach_branches(projects).await
    }

    /// Load branches and file nodes for a set of projects in two bounded
    /// round trips and assemble the trees.
    async fn attach_branches(&self, projects: Vec<Project>) -> AppResult<Vec<ProjectTree>> {
        if projects.is_empty() {
            return Ok(Vec::new());
        }

        let project_ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE project_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(&project_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list branches", e))?;

        let branch_ids: Vec<Uuid> = branches.iter().map(|b| b.id).collect();
        let nodes = if branch_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, FileNode>(
                "SELECT * FROM file_nodes WHERE branch_id = ANY($1) ORDER BY created_at ASC",
            )
            .bind(&branch_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list file nodes", e)
            })?
        };

        let mut nodes_by_branch: HashMap<Uuid, Vec<FileNode>> = HashMap::new();
        for node in nodes {
            nodes_by_branch.entry(node.branch_id).or_default().push(node);
        }

        let mut branches_by_project: HashMap<Uuid, Vec<BranchWithNodes>> = HashMap::new();
        for branch in branches {
            let nodes = nodes_by_branch.remove(&branch.id).unwrap_or_default();
            branches_by_project
                .entry(branch.project_id)
                .or_default()
                .push(BranchWithNodes { branch, nodes });
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let branches = branches_by_project.remove(&project.id).unwrap_or_default();
                ProjectTree { project, branches }
            })
            .collect())
    }
}

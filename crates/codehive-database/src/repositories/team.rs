//! Team and membership repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use codehive_core::error::{AppError, ErrorKind};
use codehive_core::result::AppResult;
use codehive_entity::team::{Team, TeamMember, TeamMemberWithUser, TeamRole};
use codehive_entity::user::PublicUser;

use super::map_unique;

/// Flat row produced by joining memberships with users.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    user_id: Uuid,
    username: String,
    email: String,
    role: TeamRole,
    created_at: DateTime<Utc>,
}

impl From<MemberRow> for TeamMemberWithUser {
    fn from(row: MemberRow) -> Self {
        Self {
            user: PublicUser {
                id: row.user_id,
                username: row.username,
                email: row.email,
            },
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// Repository for teams and team memberships.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Create a new team repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a team and its OWNER membership in one transaction.
    pub async fn create_with_owner(&self, name: &str, owner_id: Uuid) -> AppResult<Team> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create team", e))?;

        sqlx::query("INSERT INTO team_members (user_id, team_id, role) VALUES ($1, $2, $3)")
            .bind(owner_id)
            .bind(team.id)
            .bind(TeamRole::Owner)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to add team owner", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit team creation", e)
        })?;

        Ok(team)
    }

    /// Find a team by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Team>> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find team", e))
    }

    /// Insert a membership. Duplicate `(user, team)` surfaces as a conflict.
    pub async fn add_member(
        &self,
        user_id: Uuid,
        team_id: Uuid,
        role: TeamRole,
    ) -> AppResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>(
            "INSERT INTO team_members (user_id, team_id, role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(team_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique(e, "Already a member of this team", "Failed to add member"))
    }

    /// List all members of a team with their public user records.
    pub async fn members_with_users(&self, team_id: Uuid) -> AppResult<Vec<TeamMemberWithUser>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT m.user_id, u.username, u.email, m.role, m.created_at \
             FROM team_members m \
             INNER JOIN users u ON u.id = m.user_id \
             WHERE m.team_id = $1 \
             ORDER BY m.created_at ASC",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

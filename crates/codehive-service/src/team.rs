//! Team creation and membership.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use codehive_core::error::AppError;
use codehive_core::result::AppResult;
use codehive_database::repositories::team::TeamRepository;
use codehive_database::repositories::user::UserRepository;
use codehive_entity::team::{TeamMember, TeamRole, TeamWithMembers};

/// Handles standalone team creation and joins.
#[derive(Debug, Clone)]
pub struct TeamService {
    /// Team repository.
    team_repo: Arc<TeamRepository>,
    /// User repository (for owner lookups in responses).
    user_repo: Arc<UserRepository>,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(team_repo: Arc<TeamRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            team_repo,
            user_repo,
        }
    }

    /// Creates a team owned by the caller, who becomes its first
    /// member with the OWNER role.
    pub async fn create_team(&self, owner_id: Uuid, name: &str) -> AppResult<TeamWithMembers> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Team name is required"));
        }

        let team = self.team_repo.create_with_owner(name, owner_id).await?;
        info!(team_id = %team.id, owner_id = %owner_id, "Team created");

        self.team_with_members(team.id, team.name, team.owner_id, team.created_at)
            .await
    }

    /// Adds the caller to an existing team as a MEMBER.
    pub async fn join_team(&self, user_id: Uuid, team_id: Uuid) -> AppResult<TeamMember> {
        let team = self
            .team_repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team not found"))?;

        let membership = self
            .team_repo
            .add_member(user_id, team.id, TeamRole::Member)
            .await?;
        info!(team_id = %team.id, user_id = %user_id, "User joined team");

        Ok(membership)
    }

    /// Returns a team with its owner and member list resolved.
    pub async fn get_team(&self, team_id: Uuid) -> AppResult<TeamWithMembers> {
        let team = self
            .team_repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team not found"))?;

        self.team_with_members(team.id, team.name, team.owner_id, team.created_at)
            .await
    }

    async fn team_with_members(
        &self,
        team_id: Uuid,
        name: String,
        owner_id: Uuid,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> AppResult<TeamWithMembers> {
        let owner = self
            .user_repo
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team owner not found"))?;
        let members = self.team_repo.members_with_users(team_id).await?;

        Ok(TeamWithMembers {
            id: team_id,
            name,
            owner: owner.to_public(),
            members,
            created_at,
        })
    }
}

//! Team membership model and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::PublicUser;

/// Role of a user within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "team_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamRole {
    /// Team creator; also the owner of the team's projects.
    Owner,
    /// Regular member.
    Member,
}

/// Membership of a user in a team. `(user_id, team_id)` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    /// The member's user ID.
    pub user_id: Uuid,
    /// The team ID.
    pub team_id: Uuid,
    /// The member's role.
    pub role: TeamRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

/// Membership row joined with the member's public user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberWithUser {
    /// The member's public user record.
    pub user: PublicUser,
    /// The member's role.
    pub role: TeamRole,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}

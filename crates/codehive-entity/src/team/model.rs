//! Team entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::PublicUser;

use super::member::TeamMemberWithUser;

/// A team owning one or more projects.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    /// Unique team identifier.
    pub id: Uuid,
    /// Team name.
    pub name: String,
    /// The user who owns this team.
    pub owner_id: Uuid,
    /// When the team was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeam {
    /// Team name.
    pub name: String,
    /// Owning user.
    pub owner_id: Uuid,
}

/// A team with its owner and member list eagerly loaded, as returned
/// by the team-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWithMembers {
    /// Team ID.
    pub id: Uuid,
    /// Team name.
    pub name: String,
    /// The owning user.
    pub owner: PublicUser,
    /// All members, including the owner.
    pub members: Vec<TeamMemberWithUser>,
    /// When the team was created.
    pub created_at: DateTime<Utc>,
}

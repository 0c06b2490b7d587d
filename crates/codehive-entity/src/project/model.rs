//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A collaborative project. Every project belongs to exactly one team
/// and has exactly one main branch, both created with it atomically.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the project is hidden from non-members.
    pub is_private: bool,
    /// The owning user; also the OWNER member of the project's team.
    pub owner_id: Uuid,
    /// The team this project belongs to.
    pub team_id: Uuid,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Privacy flag.
    pub is_private: bool,
    /// The owning user.
    pub owner_id: Uuid,
}

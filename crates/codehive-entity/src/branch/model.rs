//! Branch entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A branch within a project. Exactly one branch per project carries
/// `is_main = true`; branch names are unique within a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Branch {
    /// Unique branch identifier.
    pub id: Uuid,
    /// Branch name (`"main"` for the main branch).
    pub name: String,
    /// Whether this is the project's main branch.
    pub is_main: bool,
    /// The project this branch belongs to.
    pub project_id: Uuid,
    /// The user who created the branch.
    pub author_id: Uuid,
    /// When the branch was created.
    pub created_at: DateTime<Utc>,
}

impl Branch {
    /// Relative directory of this branch under its project's content root:
    /// `main` for the main branch, `branches/{id}_{name}` otherwise.
    pub fn relative_dir(&self) -> String {
        if self.is_main {
            "main".to_string()
        } else {
            format!("branches/{}_{}", self.id, self.name)
        }
    }
}

/// Data required to create a new branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranch {
    /// Branch name.
    pub name: String,
    /// Whether this is the main branch.
    pub is_main: bool,
    /// Owning project.
    pub project_id: Uuid,
    /// Creating user.
    pub author_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_dir_distinguishes_main_from_side_branches() {
        let id = Uuid::new_v4();
        let mut branch = Branch {
            id,
            name: "feature-x".to_string(),
            is_main: false,
            project_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        assert_eq!(branch.relative_dir(), format!("branches/{id}_feature-x"));

        branch.is_main = true;
        assert_eq!(branch.relative_dir(), "main");
    }
}

//! Read-side projection of a user's projects.

use std::sync::Arc;

use uuid::Uuid;

use codehive_core::result::AppResult;
use codehive_database::repositories::project::ProjectRepository;
use codehive_entity::project::ProjectView;

/// Builds the dashboard projection of projects with their folder and
/// branch names and static channel lists.
#[derive(Debug, Clone)]
pub struct ProjectionService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
}

impl ProjectionService {
    /// Creates a new projection service.
    pub fn new(project_repo: Arc<ProjectRepository>) -> Self {
        Self { project_repo }
    }

    /// Lists every project owned by the user, oldest first, each
    /// expanded into its dashboard view.
    pub async fn projects_for_user(&self, user_id: Uuid) -> AppResult<Vec<ProjectView>> {
        let trees = self.project_repo.list_trees_for_owner(user_id).await?;
        Ok(trees.into_iter().map(ProjectView::from_tree).collect())
    }
}

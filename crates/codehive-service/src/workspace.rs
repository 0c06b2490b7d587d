//! Project workspaces: creation, folders, branches, and file content.

use std::sync::Arc;

use bytes::Bytes;
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use codehive_core::error::AppError;
use codehive_core::result::AppResult;
use codehive_database::repositories::branch::BranchRepository;
use codehive_database::repositories::file_node::FileNodeRepository;
use codehive_database::repositories::project::ProjectRepository;
use codehive_entity::branch::CreateBranch;
use codehive_entity::file_node::{FileNode, UploadEntry};
use codehive_entity::project::ProjectView;
use codehive_storage::ContentStore;
use codehive_storage::paths::validate_component;

/// Where a new folder lands inside a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderTarget {
    /// Root-level folder on the main branch.
    Main,
    /// A new branch with its own directory.
    Branch,
}

/// Orchestrates project records and their on-disk workspaces.
#[derive(Debug, Clone)]
pub struct WorkspaceService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
    /// Branch repository.
    branch_repo: Arc<BranchRepository>,
    /// File node repository.
    file_node_repo: Arc<FileNodeRepository>,
    /// On-disk content store.
    store: Arc<ContentStore>,
}

impl WorkspaceService {
    /// Creates a new workspace service.
    pub fn new(
        project_repo: Arc<ProjectRepository>,
        branch_repo: Arc<BranchRepository>,
        file_node_repo: Arc<FileNodeRepository>,
        store: Arc<ContentStore>,
    ) -> Self {
        Self {
            project_repo,
            branch_repo,
            file_node_repo,
            store,
        }
    }

    /// Creates a project together with its team, main branch, and
    /// owner membership, then provisions the `main/` directory.
    ///
    /// The database bundle commits first. A directory failure after
    /// commit leaves the records in place and is surfaced as an error;
    /// the mkdir is idempotent, so a retried creation of the directory
    /// can repair the workspace.
    pub async fn create_project(
        &self,
        owner_id: Uuid,
        name: &str,
        description: Option<&str>,
        is_private: bool,
    ) -> AppResult<ProjectView> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Project name is required"));
        }

        let (project, main_branch) = self
            .project_repo
            .create_bundle(owner_id, name, description, is_private)
            .await?;

        if let Err(e) = self.store.create_main_dir(project.id).await {
            warn!(
                project_id = %project.id,
                branch_id = %main_branch.id,
                error = %e,
                "Project records committed but workspace directory creation failed",
            );
            return Err(e);
        }

        info!(project_id = %project.id, owner_id = %owner_id, "Project created");
        self.project_view(project.id).await
    }

    /// Adds a folder to a project.
    ///
    /// A `main` target records a root-level FOLDER node on the main
    /// branch and creates the matching directory; the node is returned
    /// alongside the refreshed view. A `branch` target creates a new
    /// branch with its own directory; the branch starts empty, with no
    /// node rows, so no node is returned.
    pub async fn create_folder(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        folder_name: &str,
        target: FolderTarget,
    ) -> AppResult<(Option<FileNode>, ProjectView)> {
        let folder_name = folder_name.trim();
        if folder_name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }
        // Sanitized before any record is written so a rejected name
        // never leaves a committed row behind.
        let folder_name = validate_component(folder_name)?;

        self.project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        let node = match target {
            FolderTarget::Main => {
                let (_branch, node) = self
                    .file_node_repo
                    .create_root_folder(project_id, folder_name)
                    .await?;
                self.store.create_main_folder(project_id, folder_name).await?;
                info!(project_id = %project_id, node_id = %node.id, "Main folder created");
                Some(node)
            }
            FolderTarget::Branch => {
                let branch = self
                    .branch_repo
                    .create(&CreateBranch {
                        name: folder_name.to_string(),
                        is_main: false,
                        project_id,
                        author_id: user_id,
                    })
                    .await?;
                self.store.create_branch_dir(&branch).await?;
                info!(project_id = %project_id, branch_id = %branch.id, "Branch created");
                None
            }
        };

        let view = self.project_view(project_id).await?;
        Ok((node, view))
    }

    /// Streams one uploaded file into the project's upload namespace,
    /// returning the number of bytes written.
    pub async fn save_upload_entry<S>(
        &self,
        project_id: Uuid,
        relative_path: &str,
        stream: S,
    ) -> AppResult<u64>
    where
        S: Stream<Item = Result<Bytes, std::io::Error>> + Unpin + Send,
    {
        self.store
            .stream_upload(project_id, relative_path, stream)
            .await
    }

    /// Writes UTF-8 content to a path in the project's upload
    /// namespace, creating parent directories as needed.
    pub async fn create_file(
        &self,
        project_id: Uuid,
        file_path: &str,
        content: &str,
    ) -> AppResult<()> {
        self.store.write_text(project_id, file_path, content).await?;
        info!(project_id = %project_id, path = file_path, "File written");
        Ok(())
    }

    /// Lists the project's upload namespace as a nested tree. A
    /// project with no uploads yields an empty list.
    pub async fn list_files(&self, project_id: Uuid) -> AppResult<Vec<UploadEntry>> {
        self.store.list_uploads(project_id).await
    }

    async fn project_view(&self, project_id: Uuid) -> AppResult<ProjectView> {
        let tree = self
            .project_repo
            .fetch_tree(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;
        Ok(ProjectView::from_tree(tree))
    }
}

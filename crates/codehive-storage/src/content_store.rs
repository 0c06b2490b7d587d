//! Local filesystem content store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::{Stream, StreamExt};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use codehive_core::error::{AppError, ErrorKind};
use codehive_core::result::AppResult;
use codehive_entity::branch::Branch;
use codehive_entity::file_node::UploadEntry;

use crate::paths::{validate_component, validate_relative_path};

/// Content store rooted at a local directory.
///
/// Layout under the root:
///
/// ```text
/// workspaces/project_{id}/main/                  main branch (folders as subdirs)
/// workspaces/project_{id}/branches/{bid}_{name}/ one dir per non-main branch
/// uploads/{project_id}/<relative path>           raw uploads (parallel namespace)
/// ```
#[derive(Debug, Clone)]
pub struct ContentStore {
    /// Root directory for all stored content.
    root: PathBuf,
}

impl ContentStore {
    /// Create a content store rooted at the given path, creating the
    /// `workspaces/` and `uploads/` trees if absent.
    pub async fn new(data_root: &str) -> AppResult<Self> {
        let root = PathBuf::from(data_root);
        for tree in ["workspaces", "uploads"] {
            let dir = root.join(tree);
            fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create content root: {}", dir.display()),
                    e,
                )
            })?;
        }
        Ok(Self { root })
    }

    /// Content root of a project: `workspaces/project_{id}`.
    pub fn project_workspace(&self, project_id: Uuid) -> PathBuf {
        self.root.join("workspaces").join(format!("project_{project_id}"))
    }

    /// Upload root of a project: `uploads/{project_id}`.
    pub fn project_uploads(&self, project_id: Uuid) -> PathBuf {
        self.root.join("uploads").join(project_id.to_string())
    }

    /// Create the `main/` directory for a freshly created project.
    pub async fn create_main_dir(&self, project_id: Uuid) -> AppResult<()> {
        let dir = self.project_workspace(project_id).join("main");
        self.mkdir_recursive(&dir).await
    }

    /// Create a root-level folder under a project's main branch.
    pub async fn create_main_folder(&self, project_id: Uuid, name: &str) -> AppResult<()> {
        let name = validate_component(name)?;
        let dir = self.project_workspace(project_id).join("main").join(name);
        self.mkdir_recursive(&dir).await
    }

    /// Create the directory a branch maps to under its project's
    /// workspace (`main` or `branches/{id}_{name}`).
    pub async fn create_branch_dir(&self, branch: &Branch) -> AppResult<()> {
        validate_component(&branch.name)?;
        let dir = self
            .project_workspace(branch.project_id)
            .join(branch.relative_dir());
        self.mkdir_recursive(&dir).await
    }

    /// Write bytes to `uploads/{project_id}/{rel_path}`, creating
    /// intermediate directories and overwriting any existing file.
    pub async fn write_upload(
        &self,
        project_id: Uuid,
        rel_path: &str,
        data: Bytes,
    ) -> AppResult<()> {
        let rel = validate_relative_path(rel_path)?;
        let full_path = self.project_uploads(project_id).join(rel);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {rel_path}"),
                e,
            )
        })?;

        debug!(path = rel_path, bytes = data.len(), "Wrote upload");
        Ok(())
    }

    /// Stream a byte source to `uploads/{project_id}/{rel_path}`,
    /// returning the number of bytes written.
    pub async fn stream_upload<S>(
        &self,
        project_id: Uuid,
        rel_path: &str,
        mut stream: S,
    ) -> AppResult<u64>
    where
        S: Stream<Item = Result<Bytes, std::io::Error>> + Unpin + Send,
    {
        let rel = validate_relative_path(rel_path)?;
        let full_path = self.project_uploads(project_id).join(rel);
        self.ensure_parent(&full_path).await?;

        let mut file = fs::File::create(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create file: {rel_path}"),
                e,
            )
        })?;

        let mut total_bytes = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| AppError::with_source(ErrorKind::Storage, "Stream read error", e))?;
            total_bytes += chunk.len() as u64;
            file.write_all(&chunk).await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to write chunk", e)
            })?;
        }

        file.flush()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to flush file", e))?;

        debug!(path = rel_path, bytes = total_bytes, "Wrote upload from stream");
        Ok(total_bytes)
    }

    /// Write UTF-8 text to `uploads/{project_id}/{rel_path}`.
    pub async fn write_text(&self, project_id: Uuid, rel_path: &str, content: &str) -> AppResult<()> {
        self.write_upload(project_id, rel_path, Bytes::from(content.to_owned()))
            .await
    }

    /// Walk `uploads/{project_id}/` recursively into a tree of entries.
    /// A missing upload root yields an empty list.
    pub async fn list_uploads(&self, project_id: Uuid) -> AppResult<Vec<UploadEntry>> {
        let dir = self.project_uploads(project_id);
        if fs::metadata(&dir).await.is_err() {
            return Ok(Vec::new());
        }
        walk(dir).await
    }

    async fn mkdir_recursive(&self, dir: &Path) -> AppResult<()> {
        fs::create_dir_all(dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create directory: {}", dir.display()),
                e,
            )
        })?;
        debug!(dir = %dir.display(), "Created directory");
        Ok(())
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

/// Recursively list a directory into upload entries, directories first,
/// then by name.
fn walk(dir: PathBuf) -> BoxFuture<'static, AppResult<Vec<UploadEntry>>> {
    Box::pin(async move {
        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list directory: {}", dir.display()),
                e,
            )
        })?;

        while let Some(entry) = read_dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let meta = entry.metadata().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
            })?;
            let name = entry.file_name().to_string_lossy().to_string();

            if meta.is_dir() {
                let children = walk(entry.path()).await?;
                entries.push(UploadEntry::folder(name, children));
            } else {
                let modified = meta
                    .modified()
                    .ok()
                    .map(chrono::DateTime::<chrono::Utc>::from);
                entries.push(UploadEntry::file(name, meta.len(), modified));
            }
        }

        entries.sort_by(|a, b| {
            use codehive_entity::file_node::UploadEntryKind;
            let a_dir = a.kind == UploadEntryKind::Folder;
            let b_dir = b.kind == UploadEntryKind::Folder;
            b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    })
}

#[cfg(test)]
mod tests {
    use codehive_entity::file_node::UploadEntryKind;
    use futures::stream;

    use super::*;

    async fn store() -> (tempfile::TempDir, ContentStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = ContentStore::new(tmp.path().to_str().unwrap()).await.unwrap();
        (tmp, store)
    }

    #[tokio::test]
    async fn creates_workspace_layout() {
        let (tmp, store) = store().await;
        let project_id = Uuid::new_v4();
        let branch = Branch {
            id: Uuid::new_v4(),
            name: "feature-x".to_string(),
            is_main: false,
            project_id,
            author_id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
        };

        store.create_main_dir(project_id).await.unwrap();
        store.create_main_folder(project_id, "src").await.unwrap();
        store.create_branch_dir(&branch).await.unwrap();

        let ws = tmp
            .path()
            .join("workspaces")
            .join(format!("project_{project_id}"));
        assert!(ws.join("main").is_dir());
        assert!(ws.join("main").join("src").is_dir());
        assert!(
            ws.join("branches")
                .join(format!("{}_feature-x", branch.id))
                .is_dir()
        );
    }

    #[tokio::test]
    async fn rejects_folder_names_with_separators() {
        let (_tmp, store) = store().await;
        let err = store
            .create_main_folder(Uuid::new_v4(), "a/b")
            .await
            .unwrap_err();
        assert_eq!(err.kind, codehive_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn writes_and_lists_uploads() {
        let (_tmp, store) = store().await;
        let project_id = Uuid::new_v4();

        store
            .write_upload(project_id, "a/b.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap();
        store
            .write_upload(project_id, "a/c.txt", Bytes::from_static(b"!"))
            .await
            .unwrap();

        let tree = store.list_uploads(project_id).await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].name, "a");
        assert_eq!(tree[0].kind, UploadEntryKind::Folder);

        let children = tree[0].children.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "b.txt");
        assert_eq!(children[0].size, Some(5));
        assert_eq!(children[1].name, "c.txt");
    }

    #[tokio::test]
    async fn streams_upload_to_disk() {
        let (tmp, store) = store().await;
        let project_id = Uuid::new_v4();

        let source = stream::iter(vec![
            Ok(Bytes::from_static(b"hel")),
            Ok(Bytes::from_static(b"lo")),
        ]);
        let written = store
            .stream_upload(project_id, "docs/greeting.txt", source)
            .await
            .unwrap();
        assert_eq!(written, 5);

        let path = tmp
            .path()
            .join("uploads")
            .join(project_id.to_string())
            .join("docs")
            .join("greeting.txt");
        assert_eq!(std::fs::read(path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn write_text_overwrites_existing_file() {
        let (tmp, store) = store().await;
        let project_id = Uuid::new_v4();

        store
            .write_text(project_id, "notes/todo.md", "first")
            .await
            .unwrap();
        store
            .write_text(project_id, "notes/todo.md", "x")
            .await
            .unwrap();

        let path = tmp
            .path()
            .join("uploads")
            .join(project_id.to_string())
            .join("notes")
            .join("todo.md");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x");
    }

    #[tokio::test]
    async fn listing_missing_project_is_empty() {
        let (_tmp, store) = store().await;
        let tree = store.list_uploads(Uuid::new_v4()).await.unwrap();
        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn upload_cannot_escape_project_root() {
        let (_tmp, store) = store().await;
        let err = store
            .write_upload(Uuid::new_v4(), "../escape.txt", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, codehive_core::error::ErrorKind::Validation);
    }
}

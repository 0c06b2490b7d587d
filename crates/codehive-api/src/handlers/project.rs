//! Project workspace handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use futures::stream;
use uuid::Uuid;
use validator::Validate;

use codehive_core::error::AppError;
use codehive_entity::project::ProjectView;

use crate::dto::request::{CreateFileRequest, CreateFolderRequest, CreateProjectRequest};
use crate::dto::response::{CreateFileResponse, CreateFolderResponse, FilesResponse, UploadResponse};
use crate::error::ApiResult;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectView>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let view = state
        .workspace_service
        .create_project(
            principal.id,
            &req.name,
            req.description.as_deref(),
            req.is_private,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    principal: AuthPrincipal,
) -> ApiResult<Json<Vec<ProjectView>>> {
    let views = state
        .projection_service
        .projects_for_user(principal.id)
        .await?;
    Ok(Json(views))
}

/// POST /api/projects/{id}/folders
pub async fn create_folder(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<CreateFolderResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (folder, project) = state
        .workspace_service
        .create_folder(principal.id, project_id, &req.folder_name, req.target_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFolderResponse { folder, project }),
    ))
}

/// POST /api/projects/{id}/upload-folder
///
/// Each multipart part carries one file; the part's file name is its
/// path relative to the uploaded directory root.
pub async fn upload_folder(
    State(state): State<AppState>,
    _principal: AuthPrincipal,
    Path(project_id): Path<Uuid>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut count = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let relative_path = field
            .file_name()
            .or(field.name())
            .map(str::to_owned)
            .ok_or_else(|| AppError::validation("Multipart field is missing a file name"))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        state
            .workspace_service
            .save_upload_entry(
                project_id,
                &relative_path,
                stream::iter(vec![Ok::<_, std::io::Error>(data)]),
            )
            .await?;
        count += 1;
    }

    if count == 0 {
        return Err(AppError::validation("No files uploaded").into());
    }

    Ok(Json(UploadResponse { count }))
}

/// POST /api/projects/{id}/create-file
pub async fn create_file(
    State(state): State<AppState>,
    _principal: AuthPrincipal,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateFileRequest>,
) -> ApiResult<Json<CreateFileResponse>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .workspace_service
        .create_file(project_id, &req.file_path, &req.content)
        .await?;

    Ok(Json(CreateFileResponse {
        file_path: req.file_path,
    }))
}

/// GET /api/projects/{id}/files
pub async fn list_files(
    State(state): State<AppState>,
    _principal: AuthPrincipal,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<FilesResponse>> {
    let files = state.workspace_service.list_files(project_id).await?;
    Ok(Json(FilesResponse { files }))
}

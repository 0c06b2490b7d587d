//! Team handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use codehive_core::error::AppError;
use codehive_entity::team::{TeamMember, TeamWithMembers};

use crate::dto::request::{CreateTeamRequest, JoinTeamRequest};
use crate::error::ApiResult;
use crate::extractors::AuthPrincipal;
use crate::state::AppState;

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<(StatusCode, Json<TeamWithMembers>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let team = state.team_service.create_team(principal.id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// POST /api/teams/join
pub async fn join_team(
    State(state): State<AppState>,
    principal: AuthPrincipal,
    Json(req): Json<JoinTeamRequest>,
) -> ApiResult<(StatusCode, Json<TeamMember>)> {
    let membership = state
        .team_service
        .join_team(principal.id, req.team_id)
        .await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    _principal: AuthPrincipal,
    Path(team_id): Path<Uuid>,
) -> ApiResult<Json<TeamWithMembers>> {
    let team = state.team_service.get_team(team_id).await?;
    Ok(Json(team))
}

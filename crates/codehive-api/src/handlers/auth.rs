//! Signup and login handlers.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use validator::Validate;

use codehive_core::error::AppError;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::AuthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let client = client_key(&headers, addr);
    if !state.signup_limiter.check(&client) {
        return Err(AppError::rate_limited("Too many signup attempts, please try again later").into());
    }

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .auth_service
        .signup(&req.username, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: outcome.token,
            user: outcome.user,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}

/// Client key for rate limiting: first hop of `x-forwarded-for` when a
/// proxy sets it, otherwise the peer socket address.
fn client_key(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

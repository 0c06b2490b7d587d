//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use codehive_auth::{JwtDecoder, JwtEncoder, SignupRateLimiter};
use codehive_core::config::AppConfig;
use codehive_realtime::RealtimeHub;
use codehive_service::{AuthService, ProjectionService, TeamService, WorkspaceService};
use codehive_storage::ContentStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// On-disk content store.
    pub store: Arc<ContentStore>,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup rate limiter.
    pub signup_limiter: Arc<SignupRateLimiter>,

    /// WebSocket fan-out hub.
    pub hub: Arc<RealtimeHub>,

    /// Account signup and login.
    pub auth_service: Arc<AuthService>,
    /// Team creation and joins.
    pub team_service: Arc<TeamService>,
    /// Project workspaces and file content.
    pub workspace_service: Arc<WorkspaceService>,
    /// Project dashboard projection.
    pub projection_service: Arc<ProjectionService>,
}

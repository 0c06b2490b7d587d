//! Application builder: wires repositories, services, and state into
//! an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use codehive_auth::{JwtDecoder, JwtEncoder, PasswordHasher, SignupRateLimiter};
use codehive_core::config::AppConfig;
use codehive_core::error::AppError;
use codehive_database::repositories::branch::BranchRepository;
use codehive_database::repositories::file_node::FileNodeRepository;
use codehive_database::repositories::project::ProjectRepository;
use codehive_database::repositories::team::TeamRepository;
use codehive_database::repositories::user::UserRepository;
use codehive_realtime::RealtimeHub;
use codehive_service::{AuthService, ProjectionService, TeamService, WorkspaceService};
use codehive_storage::ContentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state, provisioning the content store from
/// the configured data root.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let store = Arc::new(ContentStore::new(&config.storage.data_root).await?);
    Ok(build_state_with_store(config, db_pool, store))
}

/// Builds the application state around an existing content store.
/// Used directly by tests that point the store at a scratch directory.
pub fn build_state_with_store(
    config: AppConfig,
    db_pool: PgPool,
    store: Arc<ContentStore>,
) -> AppState {
    let config = Arc::new(config);

    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let signup_limiter = Arc::new(SignupRateLimiter::new(&config.auth));
    let hub = Arc::new(RealtimeHub::new(&config.realtime));

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let team_repo = Arc::new(TeamRepository::new(db_pool.clone()));
    let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
    let branch_repo = Arc::new(BranchRepository::new(db_pool.clone()));
    let file_node_repo = Arc::new(FileNodeRepository::new(db_pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        PasswordHasher::new(),
        jwt_encoder.clone(),
    ));
    let team_service = Arc::new(TeamService::new(team_repo.clone(), user_repo.clone()));
    let workspace_service = Arc::new(WorkspaceService::new(
        project_repo.clone(),
        branch_repo,
        file_node_repo,
        store.clone(),
    ));
    let projection_service = Arc::new(ProjectionService::new(project_repo));

    AppState {
        config,
        db_pool,
        store,
        jwt_encoder,
        jwt_decoder,
        signup_limiter,
        hub,
        auth_service,
        team_service,
        workspace_service,
        projection_service,
    }
}

/// Builds the complete Axum application from prepared state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

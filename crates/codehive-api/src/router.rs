//! Route definitions for the CodeHive HTTP API.
//!
//! REST routes are mounted under `/api`; the WebSocket upgrade lives
//! at `/ws`. The router receives `AppState` and threads it through
//! every handler via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(team_routes())
        .merge(project_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Auth endpoints: signup, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
}

/// Team creation and membership
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", post(handlers::team::create_team))
        .route("/teams/join", post(handlers::team::join_team))
        .route("/teams/{id}", get(handlers::team::get_team))
}

/// Project workspaces, folders, and file content
fn project_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            post(handlers::project::create_project).get(handlers::project::list_projects),
        )
        .route(
            "/projects/{id}/folders",
            post(handlers::project::create_folder),
        )
        .route(
            "/projects/{id}/upload-folder",
            post(handlers::project::upload_folder),
        )
        .route(
            "/projects/{id}/create-file",
            post(handlers::project::create_file),
        )
        .route("/projects/{id}/files", get(handlers::project::list_files))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

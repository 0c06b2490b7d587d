//! Business logic layer for CodeHive.
//!
//! Services compose repositories, the content store, and the auth
//! primitives into the operations the HTTP layer exposes. Each service
//! is cheaply cloneable and wired once at startup.

pub mod auth;
pub mod principal;
pub mod projection;
pub mod team;
pub mod workspace;

pub use auth::AuthService;
pub use principal::Principal;
pub use projection::ProjectionService;
pub use team::TeamService;
pub use workspace::WorkspaceService;

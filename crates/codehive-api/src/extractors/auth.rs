//! `AuthPrincipal` extractor: pulls the JWT from the Authorization
//! header, validates it, and injects the caller identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use codehive_core::error::AppError;
use codehive_service::Principal;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

impl std::ops::Deref for AuthPrincipal {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_token(token)?;

        Ok(Self(Principal {
            id: claims.sub,
            email: claims.email,
        }))
    }
}

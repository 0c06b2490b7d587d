//! Account signup and login.

use std::sync::Arc;

use tracing::info;

use codehive_auth::{JwtEncoder, PasswordHasher};
use codehive_core::error::AppError;
use codehive_core::result::AppResult;
use codehive_database::repositories::user::UserRepository;
use codehive_entity::user::{CreateUser, PublicUser};

/// Handles account creation and credential verification.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

/// Outcome of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Public view of the account.
    pub user: PublicUser,
    /// Signed access token.
    pub token: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: PasswordHasher,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new account and issues an access token.
    ///
    /// A username or email collision surfaces as a conflict from the
    /// repository, keyed on the database unique constraints rather than
    /// a racy pre-check.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = self.encoder.generate_token(user.id, &user.email)?;
        info!(user_id = %user.id, username, "Account created");

        Ok(AuthOutcome {
            user: user.to_public(),
            token,
        })
    }

    /// Verifies credentials and issues an access token.
    ///
    /// An unknown email and a wrong password are reported separately,
    /// as not found and authentication failures respectively.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let token = self.encoder.generate_token(user.id, &user.email)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthOutcome {
            user: user.to_public(),
            token,
        })
    }
}

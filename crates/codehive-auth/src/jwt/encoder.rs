//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use codehive_core::config::AuthConfig;
use codehive_core::error::AppError;

use super::claims::Claims;

/// Creates signed JWT access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    token_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Generates a signed access token for the given user.
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.token_ttl_minutes);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtDecoder;

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            signup_max_requests: 5,
            signup_window_seconds: 900,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let config = auth_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user_id = Uuid::new_v4();

        let token = encoder.generate_token(user_id, "ada@example.com").unwrap();
        let claims = decoder.decode_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "ada@example.com");
        assert!(!claims.is_expired());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let encoder = JwtEncoder::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..auth_config()
        });
        let decoder = JwtDecoder::new(&auth_config());

        let token = encoder.generate_token(Uuid::new_v4(), "ada@example.com").unwrap();
        let err = decoder.decode_token(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token");
    }
}

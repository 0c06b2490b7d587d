//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT and signup throttling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Maximum signup attempts per window for a single source address.
    #[serde(default = "default_signup_max")]
    pub signup_max_requests: u32,
    /// Signup rate-limit window in seconds.
    #[serde(default = "default_signup_window")]
    pub signup_window_seconds: u64,
}

fn default_token_ttl() -> u64 {
    60
}

fn default_signup_max() -> u32 {
    5
}

fn default_signup_window() -> u64 {
    15 * 60
}
